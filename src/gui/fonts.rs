use std::{
    path::{
        Path,
        PathBuf,
    },
    sync::Arc,
};

use eframe::egui;

const FONT_NAME: &str = "hangul";

// Common install locations of fonts with Hangul coverage.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
    "C:\\Windows\\Fonts\\malgun.ttf",
    "C:\\Windows\\Fonts\\gulim.ttc",
];

/// Picks the configured font, falling back to the first installed system candidate.
pub fn find_font(configured: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = configured.map(Path::new) {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        log::warn!("Configured font {} does not exist", path.display());
    }

    SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from).find(|path| path.is_file())
}

/// Registers a Hangul-capable font ahead of egui's defaults.
/// Without one, Korean text renders as boxes, but the app stays usable.
pub fn setup_fonts(ctx: &egui::Context, configured: Option<&str>) {
    let Some(path) = find_font(configured) else {
        log::warn!("No Korean font found; set a font file in Settings");
        return;
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Failed to read font {}: {e}", path.display());
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));

    fonts.families.entry(egui::FontFamily::Proportional).or_default().insert(0, FONT_NAME.to_owned());
    fonts.families.entry(egui::FontFamily::Monospace).or_default().push(FONT_NAME.to_owned());

    ctx.set_fonts(fonts);
    log::info!("Loaded font {}", path.display());
}
