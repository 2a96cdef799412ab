mod auth;
mod me;
mod token;

pub use auth::auth;
pub use auth::authorize_url;
pub use me::me;
pub use token::refresh;
pub use token::token;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
