use std::{
    io::{self, BufRead as _, Write as _},
    path::PathBuf,
};

use frogui::{
    BrowserSession, Buttons, Config, Frame, Legend, Renderer, Screen, Services,
    services::{Favorites, LogLauncher, NoSettings, Recents, SiblingThumbnails},
};

// prints every frame as plain text
struct TextRenderer<W> {
    out: W,
}

impl<W: io::Write> TextRenderer<W> {
    fn write_frame(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        match frame.screen {
            Screen::Loading => return writeln!(self.out, "Loading..."),
            Screen::Settings { saving: true } => return writeln!(self.out, "Saving..."),
            Screen::Settings { saving: false } => return writeln!(self.out, "[settings]"),
            Screen::Listing => {}
        }
        writeln!(
            self.out,
            "== {} ({}/{})",
            frame.title, frame.position.0, frame.position.1
        )?;
        for row in frame.rows.iter() {
            let cursor = if row.selected { '>' } else { ' ' };
            let star = if row.favorite { "*" } else { "" };
            let slash = if row.entry.is_dir() && !row.entry.is_parent() {
                "/"
            } else {
                ""
            };
            writeln!(self.out, "{} {}{}{}", cursor, star, row.entry.name, slash)?;
        }
        if let Some(bucket) = frame.quick_jump {
            writeln!(self.out, "[jump: {}]", bucket.label())?;
        }
        match frame.legend {
            Legend::Favourite => writeln!(self.out, "X: favourite"),
            Legend::Remove => writeln!(self.out, "X: remove"),
            Legend::None => Ok(()),
        }
    }
}

impl<W: io::Write> Renderer for TextRenderer<W> {
    fn draw(&mut self, frame: &Frame<'_>) {
        if let Err(e) = self.write_frame(frame) {
            log::error!("Unable to draw: {}", e);
        }
    }

    fn notice(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}", message) {
            log::error!("Unable to draw: {}", e);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("frogui.toml"));
    let config = Config::load(&config_path)?;

    let services = Services {
        launcher: Box::new(LogLauncher::default()),
        recents: Box::new(Recents::open(&config.recents_file)?),
        favorites: Box::new(Favorites::open(&config.favorites_file)?),
        settings: Box::new(NoSettings),
        thumbnails: Box::new(SiblingThumbnails::default()),
    };
    let renderer = TextRenderer {
        out: io::stdout().lock(),
    };
    let mut session = BrowserSession::new(config, services).with_renderer(Box::new(renderer));
    session.start();

    // one button name per token, each pressed for a frame and then released
    for line in io::stdin().lock().lines() {
        for token in line?.split_whitespace() {
            if session.launched().is_some() {
                break;
            }
            match Buttons::parse_name(token) {
                Some(button) => {
                    session.run_frame(button);
                    session.run_frame(Buttons::empty());
                }
                None => log::warn!("Unknown button {:?}", token),
            }
        }
        if session.launched().is_some() {
            break;
        }
    }

    if let Some(target) = session.launched() {
        log::info!("Handed off {}", target);
    }
    io::stdout().flush()?;
    Ok(())
}
