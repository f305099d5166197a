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
        Self::gruvbox()
    }
}

impl Theme {
    pub fn gruvbox() -> Self {
        Theme { dark: ThemeDetails::gruvbox_dark(), light: ThemeDetails::gruvbox_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).yellow).strong()
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    green: Color32,
    yellow: Color32,
    aqua: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
}

impl ThemeDetails {
    fn gruvbox_dark() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x28, 0x28),
            foreground: Color32::from_rgb(0xeb, 0xdb, 0xb2),
            selection: Color32::from_rgb(0x50, 0x49, 0x45),
            comment: Color32::from_rgb(0x92, 0x83, 0x74),
            red: Color32::from_rgb(0xfb, 0x49, 0x34),
            green: Color32::from_rgb(0xb8, 0xbb, 0x26),
            yellow: Color32::from_rgb(0xfa, 0xbd, 0x2f),
            aqua: Color32::from_rgb(0x8e, 0xc0, 0x7c),
            background_darker: Color32::from_rgb(0x1d, 0x20, 0x21),
            background_dark: Color32::from_rgb(0x32, 0x30, 0x2f),
            background_light: Color32::from_rgb(0x3c, 0x38, 0x36),
        }
    }

    fn gruvbox_light() -> Self {
        Self {
            background: Color32::from_rgb(0xfb, 0xf1, 0xc7),
            foreground: Color32::from_rgb(0x3c, 0x38, 0x36),
            selection: Color32::from_rgb(0xd5, 0xc4, 0xa1),
            comment: Color32::from_rgb(0x7c, 0x6f, 0x64),
            red: Color32::from_rgb(0x9d, 0x00, 0x06),
            green: Color32::from_rgb(0x79, 0x74, 0x0e),
            yellow: Color32::from_rgb(0xb5, 0x76, 0x14),
            aqua: Color32::from_rgb(0x42, 0x7b, 0x58),
            background_darker: Color32::from_rgb(0xf2, 0xe5, 0xbc),
            background_dark: Color32::from_rgb(0xf5, 0xed, 0xca),
            background_light: Color32::from_rgb(0xf9, 0xf5, 0xd7),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.background,
                    bg_stroke: Stroke {
                        color: theme.background_dark,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.background_light,
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.selection,
                    bg_stroke: Stroke { color: theme.aqua, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.selection,
                    bg_stroke: Stroke { color: theme.aqua, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.background_dark,
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.aqua,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_light,
            },
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.yellow,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background_dark,
            ..default
        },
    );
}
