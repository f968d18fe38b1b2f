use std::path::PathBuf;

use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

use crate::{
    config::Config,
    cores::{self, BROWSER_CORE, UTILITY_CORE},
    empty_dirs::EmptyDirCache,
    entry::{Action, Entry, EntryKind, EntryStore, LaunchTarget},
    frame::{Frame, Legend, Row, Screen},
    input::{Buttons, FrameInput, InputTracker},
    quick_jump::{GridMove, QuickJump},
    scanner,
    services::{Renderer, Services, SettingsInput},
    view::{self, Sources, ViewId},
    viewport::{Direction, Viewport},
};

pub const REBUILD_NOTICE: &str = "Rebuilding folder cache...";
const RANDOM_ATTEMPTS: usize = 100;

pub struct BrowserSession {
    config: Config,
    services: Services,
    store: EntryStore,
    view: ViewId,
    viewport: Viewport,
    quick_jump: QuickJump,
    input: InputTracker,
    empty_dirs: EmptyDirCache,
    // selection the thumbnail was last resolved for; None forces a refresh
    thumbnail_for: Option<usize>,
    thumbnail: Option<PathBuf>,
    global_settings: bool,
    launched: Option<LaunchTarget>,
    dirty: bool,
    renderer: Option<Box<dyn Renderer>>,
    rng: StdRng,
}

impl BrowserSession {
    pub fn new(config: Config, services: Services) -> Self {
        let empty_dirs = EmptyDirCache::new(&config.roms_root, &config.cache_file);
        let viewport = Viewport::new(config.visible_rows, config.page_size);
        Self {
            config,
            services,
            store: EntryStore::default(),
            view: ViewId::Root,
            viewport,
            quick_jump: QuickJump::default(),
            input: InputTracker::default(),
            empty_dirs,
            thumbnail_for: None,
            thumbnail: None,
            global_settings: false,
            launched: None,
            dirty: true,
            renderer: None,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn start(&mut self) {
        if self.config.resume_on_boot {
            if let Some(record) = self.services.recents.list().first() {
                let target = record.target.clone();
                log::info!("Resuming {}", target.file_stem());
                self.launch(target);
                return;
            }
        }
        self.show(ViewId::Root);
    }

    pub fn apply_config(&mut self, config: Config) {
        if config.roms_root != self.config.roms_root || config.cache_file != self.config.cache_file
        {
            self.empty_dirs = EmptyDirCache::new(&config.roms_root, &config.cache_file);
        }
        self.viewport
            .set_geometry(config.visible_rows, config.page_size);
        self.viewport.clamp(self.store.len());
        self.config = config;
        self.dirty = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self) -> &ViewId {
        &self.view
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.as_slice()
    }

    pub fn selected(&self) -> usize {
        self.viewport.selected()
    }

    pub fn scroll_offset(&self) -> usize {
        self.viewport.top()
    }

    pub fn quick_jump(&self) -> &QuickJump {
        &self.quick_jump
    }

    pub fn launched(&self) -> Option<&LaunchTarget> {
        self.launched.as_ref()
    }

    pub fn empty_dirs(&self) -> &EmptyDirCache {
        &self.empty_dirs
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut Services {
        &mut self.services
    }

    // samples the buttons, acts on release edges and redraws when anything
    // changed. Returns whether a frame was drawn
    pub fn run_frame(&mut self, levels: Buttons) -> bool {
        let input = self.input.sample(levels);
        if self.launched.is_none() {
            self.dispatch(&input);
        }
        let redraw = input.changed() || self.dirty || self.launched.is_some();
        if redraw {
            self.present();
        }
        redraw
    }

    fn dispatch(&mut self, input: &FrameInput) {
        if input.released(Buttons::SELECT) {
            self.open_settings();
            return;
        }
        if self.services.settings.is_active() {
            let edges = SettingsInput {
                up: input.released(Buttons::UP),
                down: input.released(Buttons::DOWN),
                left: input.released(Buttons::LEFT),
                right: input.released(Buttons::RIGHT),
                confirm: input.released(Buttons::A),
                back: input.released(Buttons::B),
                reset: input.released(Buttons::Y),
            };
            if !self.services.settings.handle_input(&edges) {
                log::trace!("Settings ignored {:?}", input.released);
            }
            return;
        }
        if self.quick_jump.is_active() {
            self.quick_jump_input(input);
            return;
        }
        if input.released(Buttons::RIGHT) && self.open_quick_jump() {
            return;
        }

        let mut moved = false;
        if input.released(Buttons::UP) {
            self.step(Direction::Previous);
            moved = true;
        }
        if input.released(Buttons::DOWN) {
            self.step(Direction::Next);
            moved = true;
        }
        if input.released(Buttons::L) {
            self.page(Direction::Previous);
            moved = true;
        }
        if input.released(Buttons::R) {
            self.page(Direction::Next);
            moved = true;
        }
        if moved {
            return;
        }

        if input.released(Buttons::X) {
            self.toggle_favorite();
        } else if input.released(Buttons::A) {
            self.confirm();
        } else if input.released(Buttons::B) {
            self.back();
        }
    }

    fn quick_jump_input(&mut self, input: &FrameInput) {
        for (button, mv) in [
            (Buttons::UP, GridMove::Up),
            (Buttons::DOWN, GridMove::Down),
            (Buttons::LEFT, GridMove::Left),
            (Buttons::RIGHT, GridMove::Right),
        ] {
            if input.released(button) {
                self.quick_jump.move_cursor(mv);
            }
        }
        if input.released(Buttons::A) {
            if let Some(index) = self.quick_jump.confirm(self.store.as_slice()) {
                self.viewport.select(index, self.store.len());
            }
        } else if input.released(Buttons::B) {
            self.quick_jump.cancel();
        }
    }

    fn open_settings(&mut self) {
        let settings = &mut self.services.settings;
        if settings.is_active() {
            self.global_settings = !self.global_settings;
        }
        let loaded = if self.global_settings {
            settings.load_global()
        } else {
            match &self.view {
                ViewId::Root => settings.load_for_core(BROWSER_CORE),
                ViewId::Directory(path) => match path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .and_then(cores::core_for_console)
                {
                    Some(core) => settings.load_for_core(core),
                    None => false,
                },
                _ => false,
            }
        };
        if loaded {
            settings.show_menu();
        }
        self.dirty = true;
    }

    pub fn open_quick_jump(&mut self) -> bool {
        if !self.view.is_listing() || self.store.is_empty() {
            return false;
        }
        self.quick_jump.open();
        true
    }

    pub fn step(&mut self, direction: Direction) {
        self.viewport.step(direction, self.store.len());
    }

    pub fn page(&mut self, direction: Direction) {
        self.viewport.page(direction, self.store.len());
    }

    // replaces the listing with the rows of `view` and selects the first row.
    // When the rows cannot be built, everything stays as it was
    pub fn show(&mut self, view: ViewId) -> bool {
        if view == ViewId::Root && self.config.hide_empty_folders {
            let renderer = &mut self.renderer;
            self.empty_dirs.load(|| {
                if let Some(renderer) = renderer.as_mut() {
                    renderer.notice(REBUILD_NOTICE);
                }
            });
        }

        let utilities_dir = self.config.utilities_dir();
        let sources = Sources {
            root: &self.config.roms_root,
            utilities_dir: &utilities_dir,
            empty_dirs: self.config.hide_empty_folders.then_some(&self.empty_dirs),
            recents: self.services.recents.list(),
            favorites: self.services.favorites.list(),
        };
        let result = view::populate(&view, &sources).and_then(|rows| self.store.replace(rows));
        if let Err(e) = result {
            log::error!("Unable to show {:?}: {:#}", view, e);
            return false;
        }

        log::debug!("Showing {:?} with {} entries", view, self.store.len());
        self.view = view;
        self.viewport.reset();
        self.quick_jump.close();
        self.thumbnail_for = None;
        self.dirty = true;
        true
    }

    // leaves the current view for `target`, putting the selection back on
    // the row we came from
    fn return_to(&mut self, target: ViewId) {
        let departed = self.view.clone();
        if !self.show(target) {
            return;
        }
        let index = match &departed {
            ViewId::Directory(path) => path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|name| self.store.position_by_name(name)),
            other => self.store.position_of_link(other),
        };
        if let Some(index) = index {
            self.viewport.select(index, self.store.len());
        }
    }

    pub fn back(&mut self) {
        if let Some(target) = self.view.parent(&self.config.roms_root) {
            self.return_to(target);
        }
    }

    pub fn confirm(&mut self) {
        let Some(entry) = self.store.get(self.viewport.selected()) else {
            return;
        };
        match entry.kind.clone() {
            EntryKind::Parent(target) => self.return_to(target),
            EntryKind::Directory(path) => {
                let view = ViewId::for_path(&path, &self.config.roms_root);
                self.show(view);
            }
            EntryKind::Link(view) => {
                self.show(view);
            }
            EntryKind::Action(Action::RandomGame) => self.random_game(),
            EntryKind::Action(Action::RebuildCache) => self.rebuild_cache(),
            EntryKind::File(path) => self.launch_file(&path),
            EntryKind::Launch(target) => self.launch(target),
            EntryKind::Info => {}
        }
    }

    // adds or removes a favorite in a real directory; removes the selected
    // row inside Favorites. Everywhere else this does nothing
    pub fn toggle_favorite(&mut self) {
        let selected = self.viewport.selected();
        let Some(entry) = self.store.get(selected) else {
            return;
        };

        if self.view == ViewId::Favorites {
            if matches!(entry.kind, EntryKind::Launch(_)) {
                self.remove_favorite(selected);
            }
            return;
        }

        if let (ViewId::Directory(_), EntryKind::File(path)) = (&self.view, &entry.kind) {
            match cores::launch_target(&self.config.roms_root, path) {
                Some(t) => {
                    let now = self
                        .services
                        .favorites
                        .toggle(&t.core_id, &t.file_name, &t.directory);
                    log::info!(
                        "{} {} favorites",
                        t.file_stem(),
                        if now { "added to" } else { "removed from" }
                    );
                    self.dirty = true;
                }
                None => log::warn!("Not a console file: {}", path.display()),
            }
        }
    }

    fn remove_favorite(&mut self, index: usize) {
        self.services.favorites.remove_at(index);
        if !self.show(ViewId::Favorites) {
            return;
        }
        let count = self.services.favorites.count();
        let index = if count == 0 { 0 } else { index.min(count - 1) };
        self.viewport.select(index, self.store.len());
    }

    fn launch_file(&mut self, path: &std::path::Path) {
        let target = if self.view == ViewId::Utilities {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|name| LaunchTarget::new(UTILITY_CORE, name, UTILITY_CORE))
        } else {
            cores::launch_target(&self.config.roms_root, path)
        };
        match target {
            Some(target) => self.launch(target),
            None => log::warn!("Unable to launch {}", path.display()),
        }
    }

    fn launch(&mut self, target: LaunchTarget) {
        self.services
            .recents
            .add(&target.core_id, &target.file_name, &target.directory);
        self.services.launcher.launch(&target);
        self.quick_jump.close();
        self.launched = Some(target);
        self.dirty = true;
    }

    fn random_game(&mut self) {
        let root = self.config.roms_root.clone();
        let empty_dirs = self.config.hide_empty_folders.then_some(&self.empty_dirs);
        let consoles = scanner::containers(&root, empty_dirs);
        if !consoles.is_empty() {
            for _ in 0..RANDOM_ATTEMPTS {
                let console = &consoles[self.rng.gen_range(0..consoles.len())];
                let files = scanner::files(console);
                if files.is_empty() {
                    continue;
                }
                let file = &files[self.rng.gen_range(0..files.len())];
                if let Some(target) = cores::launch_target(&root, file) {
                    self.launch(target);
                    return;
                }
            }
        }
        log::warn!("No game found for a random pick under {}", root.display());
        self.show(ViewId::Root);
    }

    fn rebuild_cache(&mut self) {
        self.notice(REBUILD_NOTICE);
        self.empty_dirs.rebuild();
        self.show(ViewId::Root);
    }

    fn notice(&mut self, message: &str) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.notice(message);
        }
    }

    fn present(&mut self) {
        self.dirty = false;
        if self.launched.is_none() {
            self.refresh_thumbnail();
        }
        if let Some(mut renderer) = self.renderer.take() {
            renderer.draw(&self.frame());
            self.renderer = Some(renderer);
        }
    }

    fn refresh_thumbnail(&mut self) {
        let selected = self.viewport.selected();
        if self.thumbnail_for == Some(selected) {
            return;
        }
        self.thumbnail_for = Some(selected);

        let wanted = self
            .store
            .get(selected)
            .and_then(|e| match &e.kind {
                EntryKind::File(path) => Some(path.clone()),
                EntryKind::Launch(t) => Some(t.full_path(&self.config.roms_root)),
                _ => None,
            })
            .map(|path| self.services.thumbnails.resolve(&path));
        if wanted == self.thumbnail {
            return;
        }
        if self.thumbnail.take().is_some() {
            self.services.thumbnails.release();
        }
        if let Some(path) = wanted {
            if self.services.thumbnails.load(&path) {
                self.thumbnail = Some(path);
            }
        }
    }

    pub fn frame(&self) -> Frame<'_> {
        let count = self.store.len();
        let selected = self.viewport.selected();
        let screen = if self.launched.is_some() {
            Screen::Loading
        } else if self.services.settings.is_active() {
            Screen::Settings {
                saving: self.services.settings.is_saving(),
            }
        } else {
            Screen::Listing
        };

        let rows = match screen {
            Screen::Listing => self
                .viewport
                .window(count)
                .filter_map(|index| {
                    let entry = self.store.get(index)?;
                    Some(Row {
                        index,
                        entry,
                        selected: index == selected,
                        favorite: self.is_favorite_row(entry),
                    })
                })
                .collect(),
            _ => Vec::new(),
        };
        let legend = match self.view {
            ViewId::Favorites => Legend::Remove,
            ViewId::Directory(_) => Legend::Favourite,
            _ => Legend::None,
        };

        Frame {
            screen,
            title: self.view.title(),
            rows,
            position: (if count == 0 { 0 } else { selected + 1 }, count),
            legend,
            quick_jump: self
                .quick_jump
                .is_active()
                .then(|| self.quick_jump.bucket()),
        }
    }

    fn is_favorite_row(&self, entry: &Entry) -> bool {
        let (ViewId::Directory(_), EntryKind::File(path)) = (&self.view, &entry.kind) else {
            return false;
        };
        cores::launch_target(&self.config.roms_root, path)
            .is_some_and(|t| self.services.favorites.is_favorite(&t.directory, &t.file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::TOOLS_LABEL;
    use std::{
        cell::RefCell,
        fs::{self, File},
        rc::Rc,
    };
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        root: PathBuf,
        session: BrowserSession,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("ROMS");
        fs::create_dir(&root).unwrap();
        for d in ["gb", "nes", "empty"] {
            fs::create_dir(root.join(d)).unwrap();
        }
        for f in ["Tetris.gb", "Kirby.gb", "Alleyway.gb"] {
            File::create(root.join("gb").join(f)).unwrap();
        }
        fs::create_dir(root.join("gb").join("hacks")).unwrap();
        File::create(root.join("gb").join("hacks").join("Tetris DX.gb")).unwrap();
        File::create(root.join("nes").join("Zelda.nes")).unwrap();

        let config = Config {
            roms_root: root.clone(),
            cache_file: dir.path().join("empty.cache"),
            recents_file: dir.path().join("recent.txt"),
            favorites_file: dir.path().join("favorites.txt"),
            visible_rows: 4,
            ..Config::default()
        };
        let mut session = BrowserSession::new(config, Services::default()).with_seed(7);
        session.start();
        Fixture {
            _dir: dir,
            root,
            session,
        }
    }

    fn names(session: &BrowserSession) -> Vec<&str> {
        session.entries().iter().map(|e| e.name.as_str()).collect()
    }

    fn select_named(session: &mut BrowserSession, name: &str) {
        let index = session.store.position_by_name(name).unwrap();
        session.viewport.select(index, session.store.len());
    }

    #[test]
    fn root_hides_empty_folders() {
        let fx = fixture();
        assert_eq!(
            names(&fx.session),
            ["Recent games", "Favorites", "Random game", "gb", "nes", TOOLS_LABEL]
        );
        assert!(fx.session.empty_dirs().contains("empty"));
    }

    #[test]
    fn root_shows_empty_folders_when_allowed() {
        let mut fx = fixture();
        let mut config = fx.session.config().clone();
        config.hide_empty_folders = false;
        fx.session.apply_config(config);
        fx.session.show(ViewId::Root);
        assert!(names(&fx.session).contains(&"empty"));
    }

    #[test]
    fn enter_and_leave_restores_selection() {
        let mut fx = fixture();
        select_named(&mut fx.session, "nes");
        fx.session.confirm();
        assert_eq!(fx.session.view(), &ViewId::Directory(fx.root.join("nes")));
        assert_eq!(names(&fx.session), ["..", "Zelda.nes"]);
        assert_eq!(fx.session.selected(), 0);

        fx.session.confirm();
        assert_eq!(fx.session.view(), &ViewId::Root);
        assert_eq!(fx.session.entries()[fx.session.selected()].name, "nes");
    }

    #[test]
    fn back_from_nested_directory_ascends_one_level() {
        let mut fx = fixture();
        select_named(&mut fx.session, "gb");
        fx.session.confirm();
        select_named(&mut fx.session, "hacks");
        fx.session.confirm();
        assert_eq!(names(&fx.session), ["..", "Tetris DX.gb"]);

        fx.session.back();
        assert_eq!(fx.session.view(), &ViewId::Directory(fx.root.join("gb")));
        assert_eq!(fx.session.entries()[fx.session.selected()].name, "hacks");
        fx.session.back();
        assert_eq!(fx.session.entries()[fx.session.selected()].name, "gb");
        fx.session.back();
        assert_eq!(fx.session.view(), &ViewId::Root);
    }

    #[test]
    fn special_views_return_to_their_row() {
        let mut fx = fixture();
        select_named(&mut fx.session, TOOLS_LABEL);
        fx.session.confirm();
        assert_eq!(fx.session.view(), &ViewId::Tools);
        select_named(&mut fx.session, "Credits");
        fx.session.confirm();
        assert_eq!(fx.session.view(), &ViewId::Credits);

        fx.session.back();
        assert_eq!(fx.session.view(), &ViewId::Tools);
        assert_eq!(fx.session.entries()[fx.session.selected()].name, "Credits");
        fx.session.back();
        assert_eq!(fx.session.view(), &ViewId::Root);
        assert_eq!(fx.session.entries()[fx.session.selected()].name, TOOLS_LABEL);
        assert!(fx.session.scroll_offset() <= fx.session.selected());
    }

    #[test]
    fn launching_a_file_records_recent() {
        let mut fx = fixture();
        select_named(&mut fx.session, "gb");
        fx.session.confirm();
        select_named(&mut fx.session, "Tetris.gb");
        fx.session.confirm();
        let launched = fx.session.launched().unwrap();
        assert_eq!(launched, &LaunchTarget::new("gb", "Tetris.gb", "gb"));
        assert_eq!(fx.session.services().recents.count(), 1);
        assert_eq!(fx.session.frame().screen, Screen::Loading);
    }

    #[test]
    fn recents_row_launches_its_target() {
        let mut fx = fixture();
        fx.session
            .services_mut()
            .recents
            .add("nes", "Zelda.nes", "nes");
        fx.session.show(ViewId::Recents);
        assert_eq!(names(&fx.session), ["Zelda", ".."]);
        fx.session.confirm();
        assert_eq!(fx.session.launched().unwrap().core_id, "nes");
    }

    #[test]
    fn favorites_toggle_and_remove() {
        let mut fx = fixture();
        select_named(&mut fx.session, "gb");
        fx.session.confirm();
        let before = fx.session.services().favorites.count();
        select_named(&mut fx.session, "Kirby.gb");
        fx.session.toggle_favorite();
        assert_eq!(fx.session.services().favorites.count(), before + 1);
        assert!(fx.session.frame().selected_row().unwrap().favorite);
        fx.session.toggle_favorite();
        assert_eq!(fx.session.services().favorites.count(), before);

        for name in ["Kirby.gb", "Tetris.gb"] {
            select_named(&mut fx.session, name);
            fx.session.toggle_favorite();
        }
        fx.session.show(ViewId::Favorites);
        assert_eq!(fx.session.frame().legend, Legend::Remove);
        fx.session.step(Direction::Next);
        fx.session.toggle_favorite();
        assert_eq!(names(&fx.session), ["Kirby", ".."]);
        assert_eq!(fx.session.selected(), 0);
        fx.session.toggle_favorite();
        assert_eq!(names(&fx.session), [".."]);
        // the back row cannot be removed
        fx.session.toggle_favorite();
        assert_eq!(names(&fx.session), [".."]);
    }

    #[test]
    fn favorites_are_not_toggled_outside_directories() {
        let mut fx = fixture();
        fx.session
            .services_mut()
            .recents
            .add("nes", "Zelda.nes", "nes");
        fx.session.show(ViewId::Recents);
        fx.session.toggle_favorite();
        assert_eq!(fx.session.services().favorites.count(), 0);
    }

    #[test]
    fn quick_jump_only_over_real_listings() {
        let mut fx = fixture();
        assert!(fx.session.open_quick_jump());
        fx.session.quick_jump.cancel();
        fx.session.show(ViewId::Tools);
        assert!(!fx.session.open_quick_jump());
    }

    #[test]
    fn random_game_launches_something() {
        let mut fx = fixture();
        select_named(&mut fx.session, "Random game");
        fx.session.confirm();
        let launched = fx.session.launched().unwrap();
        assert!(["gb", "nes"].contains(&launched.core_id.as_str()));
    }

    #[test]
    fn random_game_without_games_returns_to_root() {
        let mut fx = fixture();
        fs::remove_dir_all(fx.root.join("gb")).unwrap();
        fs::remove_file(fx.root.join("nes").join("Zelda.nes")).unwrap();
        select_named(&mut fx.session, "Random game");
        fx.session.confirm();
        assert!(fx.session.launched().is_none());
        assert_eq!(fx.session.view(), &ViewId::Root);
    }

    #[test]
    fn utilities_launch_with_utility_core() {
        let mut fx = fixture();
        let utils = fx.root.join("js2000");
        fs::create_dir(&utils).unwrap();
        File::create(utils.join("calc.js")).unwrap();
        fx.session.show(ViewId::Utilities);
        assert_eq!(fx.session.entries()[0].name, "calc.js");
        fx.session.confirm();
        assert_eq!(
            fx.session.launched(),
            Some(&LaunchTarget::new("js2000", "calc.js", "js2000"))
        );
    }

    #[test]
    fn rebuild_action_refreshes_cache_and_returns_to_root() {
        struct Notices(Rc<RefCell<Vec<String>>>);
        impl Renderer for Notices {
            fn draw(&mut self, _frame: &Frame<'_>) {}
            fn notice(&mut self, message: &str) {
                self.0.borrow_mut().push(message.to_string());
            }
        }

        let mut fx = fixture();
        let seen = Rc::new(RefCell::new(Vec::new()));
        fx.session.renderer = Some(Box::new(Notices(seen.clone())));
        File::create(fx.root.join("empty").join("game.gb")).unwrap();
        fx.session.show(ViewId::Utilities);
        select_named(&mut fx.session, view::REBUILD_LABEL);
        fx.session.confirm();
        assert_eq!(*seen.borrow(), [REBUILD_NOTICE]);
        assert_eq!(fx.session.view(), &ViewId::Root);
        assert!(names(&fx.session).contains(&"empty"));
    }

    #[test]
    fn resume_on_boot_launches_most_recent() {
        let fx = fixture();
        let mut config = fx.session.config().clone();
        config.resume_on_boot = true;
        let mut services = Services::default();
        services.recents.add("gb", "Kirby.gb", "gb");
        services.recents.add("nes", "Zelda.nes", "nes");
        let mut session = BrowserSession::new(config, services);
        session.start();
        assert_eq!(session.launched().unwrap().file_name, "Zelda.nes");
        assert!(session.entries().is_empty());
    }

    #[test]
    fn frame_reports_window_and_position() {
        let mut fx = fixture();
        fx.session.step(Direction::Previous);
        let frame = fx.session.frame();
        assert_eq!(frame.screen, Screen::Listing);
        assert_eq!(frame.title, view::ROOT_TITLE);
        assert_eq!(frame.position, (6, 6));
        assert_eq!(frame.rows.len(), 4);
        assert_eq!(frame.rows.first().unwrap().index, 2);
        assert_eq!(frame.selected_row().unwrap().entry.name, TOOLS_LABEL);
        assert_eq!(frame.legend, Legend::None);
    }
}
