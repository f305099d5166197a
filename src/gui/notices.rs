use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

const NOTICE_DURATION: Duration = Duration::from_millis(3500);

enum NoticeKind {
    Info,
    Error,
}

struct Notice {
    text: String,
    kind: NoticeKind,
    created: Instant,
}

/// Transient, non-blocking messages stacked in the bottom-right corner.
/// Both success and failure reports go through here; each notice expires on
/// its own and never blocks input.
#[derive(Default)]
pub struct Notices {
    notices: Vec<Notice>,
}

impl Notices {
    pub fn info(&mut self, text: impl Into<String>) {
        self.push(text.into(), NoticeKind::Info);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text.into(), NoticeKind::Error);
    }

    fn push(&mut self, text: String, kind: NoticeKind) {
        self.notices.push(Notice { text, kind, created: Instant::now() });
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        self.notices.retain(|notice| notice.created.elapsed() < NOTICE_DURATION);

        if self.notices.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("notices"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::Vec2::new(-12.0, -12.0))
            .show(ctx, |ui| {
                for notice in &self.notices {
                    let accent = match notice.kind {
                        NoticeKind::Info => theme.green(ctx),
                        NoticeKind::Error => theme.red(ctx),
                    };

                    egui::Frame::window(ui.style())
                        .stroke(egui::Stroke::new(1.5, accent))
                        .show(ui, |ui| {
                            ui.label(&notice.text);
                        });
                    ui.add_space(6.0);
                }
            });

        // Expiry should not wait for the next input event.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
