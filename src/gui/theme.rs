use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classroom()
    }
}

impl Theme {
    pub fn classroom() -> Self {
        Theme { dark: ThemeDetails::chalkboard(), light: ThemeDetails::paper() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode { &self.dark } else { &self.light }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).accent).strong()
    }

    pub fn correct(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn wrong(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }

    /// Colour for a quiz percentage; green from 80, amber from 40.
    pub fn score(&self, ctx: &egui::Context, percentage: u32) -> Color32 {
        let details = self.details(ctx);
        match percentage {
            80.. => details.green,
            40..=79 => details.orange,
            _ => details.red,
        }
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    accent: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    fn chalkboard() -> Self {
        Self {
            background: Color32::from_rgb(30, 36, 44),
            foreground: Color32::from_rgb(220, 224, 228),
            selection: Color32::from_rgb(64, 76, 96),
            comment: Color32::from_rgb(128, 140, 160),
            red: Color32::from_rgb(239, 108, 108),
            orange: Color32::from_rgb(245, 171, 92),
            green: Color32::from_rgb(102, 204, 138),
            accent: Color32::from_rgb(102, 126, 234),
            background_darker: Color32::from_rgb(22, 27, 34),
            background_dark: Color32::from_rgb(26, 31, 39),
            background_light: Color32::from_rgb(44, 52, 64),
            background_lighter: Color32::from_rgb(58, 68, 82),
        }
    }

    fn paper() -> Self {
        Self {
            background: Color32::from_rgb(250, 250, 247),
            foreground: Color32::from_rgb(40, 40, 48),
            selection: Color32::from_rgb(206, 214, 246),
            comment: Color32::from_rgb(120, 124, 140),
            red: Color32::from_rgb(200, 64, 64),
            orange: Color32::from_rgb(214, 130, 40),
            green: Color32::from_rgb(46, 160, 90),
            accent: Color32::from_rgb(90, 103, 216),
            background_darker: Color32::from_rgb(228, 230, 236),
            background_dark: Color32::from_rgb(240, 241, 245),
            background_light: Color32::from_rgb(255, 255, 252),
            background_lighter: Color32::from_rgb(255, 255, 255),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn widget(
    theme: &ThemeDetails,
    bg_fill: Color32,
    weak_bg_fill: Color32,
    bg_stroke: Color32,
    default: WidgetVisuals,
) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill,
        weak_bg_fill,
        bg_stroke: Stroke { color: bg_stroke, ..default.bg_stroke },
        fg_stroke: Stroke { color: theme.foreground, ..default.fg_stroke },
        ..default
    }
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };
    let widgets = &default.widgets;

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    theme,
                    theme.background,
                    theme.background_lighter,
                    theme.background_light,
                    widgets.noninteractive,
                ),
                inactive: widget(
                    theme,
                    theme.background_light,
                    theme.background_lighter,
                    theme.background_dark,
                    widgets.inactive,
                ),
                hovered: widget(
                    theme,
                    theme.selection,
                    theme.background_lighter,
                    theme.accent,
                    widgets.hovered,
                ),
                active: widget(
                    theme,
                    theme.selection,
                    theme.background_light,
                    theme.accent,
                    widgets.active,
                ),
                open: widget(
                    theme,
                    theme.background_dark,
                    theme.background_lighter,
                    theme.accent,
                    widgets.open,
                ),
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.accent,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_dark,
            },
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background_dark,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            ..default.clone()
        },
    );
}

/// Switches between the registered dark and light variants.
pub fn apply_dark_mode(ctx: &egui::Context, dark_mode: bool) {
    let (theme, preference) = if dark_mode {
        (egui::Theme::Dark, egui::ThemePreference::Dark)
    } else {
        (egui::Theme::Light, egui::ThemePreference::Light)
    };
    ctx.set_theme(theme);
    ctx.options_mut(|o| o.theme_preference = preference);
}
