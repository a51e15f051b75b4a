//! Application state — single-owner, main-thread only.

use crate::dashboard::Dashboard;
use crate::scene::Layer;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

pub struct App {
    pub dashboard: Dashboard,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        let mut app = Self {
            dashboard,
            running: true,
            status_message: None,
        };
        app.refresh_status();
        app
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Describe the view just rendered: a warning if it failed.
    pub fn refresh_status(&mut self) {
        let scene = self.dashboard.scene();
        let view = self.dashboard.current();
        let failure = scene.elements().iter().find_map(|e| match &e.layer {
            Layer::Message(text) => Some(text.clone()),
            Layer::Plot(_) => None,
        });
        match failure {
            Some(text) => self.set_warning(format!("{view}: {text}")),
            None => {
                let console = scene.console().len();
                if console > 0 {
                    self.set_status(format!("{view} view: {} forecast lines", console - 1));
                } else {
                    self.set_status(format!("{view} view"));
                }
            }
        }
    }
}
