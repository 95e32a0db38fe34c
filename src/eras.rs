use phf::phf_map;

use crate::errors::EraBlenderError;

/// One entry of the static era style table. The `color` tag is
/// presentation-only metadata for the frontend slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraStyle {
    pub year: u16,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub prompt: &'static str,
}

pub const SUPPORTED_YEARS: [u16; 4] = [1900, 1950, 2000, 2050];

static ERA_STYLES: phf::Map<u16, EraStyle> = phf_map! {
    1900u16 => EraStyle {
        year: 1900,
        label: "1900s",
        description: "Victorian Era - Sepia tones, formal portraits",
        color: "vintage",
        prompt: "Transform this image to look like it was taken in the 1900s Victorian era. Apply:\n\
            - Sepia tones and vintage coloring\n\
            - Formal, posed composition typical of early photography\n\
            - Soft, diffused lighting reminiscent of early film photography\n\
            - Slightly blurred or grainy texture\n\
            - Formal clothing and accessories from the 1900s period\n\
            - Ornate backgrounds or simple studio settings\n\
            - Maintain the original subject and scene composition",
    },
    1950u16 => EraStyle {
        year: 1950,
        label: "1950s",
        description: "Golden Age - Classic photography, vibrant colors",
        color: "classic",
        prompt: "Transform this image to look like it was taken in the 1950s Golden Age. Apply:\n\
            - Rich, saturated colors typical of Kodachrome film\n\
            - Classic mid-century modern aesthetic\n\
            - Clean, optimistic styling\n\
            - 1950s fashion, hairstyles, and design elements\n\
            - Bright, well-lit photography style\n\
            - Vintage cars, architecture, and objects from the era\n\
            - Maintain the original subject and scene composition",
    },
    2000u16 => EraStyle {
        year: 2000,
        label: "2000s",
        description: "Digital Era - Sharp, modern aesthetics",
        color: "modern",
        prompt: "Transform this image to look like it was taken in the 2000s digital era. Apply:\n\
            - Crisp, digital camera quality\n\
            - Bright, saturated colors\n\
            - Modern lighting and composition\n\
            - Y2K-era fashion and technology\n\
            - Digital photography aesthetics\n\
            - Contemporary urban or suburban settings\n\
            - Maintain the original subject and scene composition",
    },
    2050u16 => EraStyle {
        year: 2050,
        label: "2050s",
        description: "Future Vision - Holographic, enhanced reality",
        color: "future",
        prompt: "Transform this image to look like it could be from the 2050s future. Apply:\n\
            - Holographic and enhanced digital aesthetics\n\
            - Neon accents and futuristic lighting\n\
            - Advanced technology integration\n\
            - Sleek, minimalist futuristic design\n\
            - Enhanced reality effects\n\
            - Futuristic fashion and environments\n\
            - Subtle sci-fi elements\n\
            - Maintain the original subject and scene composition",
    },
};

pub fn resolve(year: u16) -> Result<&'static EraStyle, EraBlenderError> {
    ERA_STYLES
        .get(&year)
        .ok_or_else(|| EraBlenderError::UnsupportedEra(year.to_string()))
}

pub fn supported_years_list() -> String {
    SUPPORTED_YEARS
        .iter()
        .map(|year| year.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Final prompt for the text variant is the era template followed by the
/// user's scene description; the image variant uses the template alone and
/// sends the image bytes as a separate inline part.
pub fn build_prompt(style: &EraStyle, scene_text: Option<&str>) -> String {
    match scene_text {
        Some(text) => format!("{}\n\n{}", style.prompt, text),
        None => style.prompt.to_string(),
    }
}
