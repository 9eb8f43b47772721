//! Reading Bingo entry point
//!
//! Handles platform-specific initialization and wires user actions to the board.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, MouseEvent};

    use reading_bingo::app::{ActionOutcome, BingoApp};
    use reading_bingo::platform::{self, LocalStorage};
    use reading_bingo::renderer::grid::INDEX_ATTR;
    use reading_bingo::renderer::{
        ConfettiCanvas, apply_theme, render_grid, show_toast, update_cell, update_progress,
        update_winners,
    };
    use reading_bingo::settings::Theme;

    const SHUFFLE_PROMPT: &str =
        "Shuffle the board? Your progress will be kept (checked boxes move with tasks).";
    const RESET_PROMPT: &str = "Reset all progress? This cannot be undone.";

    /// Page instance holding all state
    struct Page {
        app: BingoApp<LocalStorage>,
        document: Document,
        rng: Pcg32,
        theme: Theme,
        confetti: Option<Rc<RefCell<ConfettiCanvas>>>,
    }

    impl Page {
        fn new(document: Document, seed: u64) -> Self {
            let app = BingoApp::initialize(LocalStorage::open());
            let theme = Theme::load(app.store(), platform::prefers_dark());
            let confetti = ConfettiCanvas::new(&document).map(|c| Rc::new(RefCell::new(c)));
            if confetti.is_none() {
                log::warn!("No confetti canvas, celebrations will be toast-only");
            }
            Self {
                app,
                document,
                rng: Pcg32::seed_from_u64(seed),
                theme,
                confetti,
            }
        }

        /// Full redraw: grid, progress, highlights
        fn render_all(&self, outcome: &ActionOutcome) {
            if let Err(e) = render_grid(&self.document, self.app.board()) {
                log::error!("Failed to render grid: {:?}", e);
            }
            update_progress(&self.document, self.app.board());
            update_winners(&self.document, &outcome.report);
        }

        /// Toast and confetti for newly completed lines
        fn celebrate(&mut self, outcome: &ActionOutcome) {
            let Some(message) = outcome.transition.message() else {
                return;
            };
            show_toast(&message);
            if let Some(confetti) = &self.confetti {
                ConfettiCanvas::fire(confetti, &mut self.rng);
            }
        }

        fn start(&mut self) {
            apply_theme(&self.document, self.theme);
            let outcome = self.app.refresh();
            self.render_all(&outcome);
            self.celebrate(&outcome);
        }

        fn toggle_mark(&mut self, index: usize) {
            match self.app.toggle_mark(index) {
                Ok(outcome) => {
                    let marked = self.app.board().marked[index];
                    update_cell(&self.document, index, marked);
                    update_progress(&self.document, self.app.board());
                    update_winners(&self.document, &outcome.report);
                    self.celebrate(&outcome);
                }
                Err(e) => log::warn!("Ignoring click: {}", e),
            }
        }

        fn shuffle(&mut self) {
            if !platform::confirm(SHUFFLE_PROMPT) {
                return;
            }
            let outcome = self.app.shuffle(&mut self.rng);
            self.render_all(&outcome);
            show_toast("Board Curated");
        }

        fn reset(&mut self) {
            if !platform::confirm(RESET_PROMPT) {
                return;
            }
            let outcome = self.app.reset();
            self.render_all(&outcome);
            show_toast("Board Reset");
        }

        fn toggle_theme(&mut self) {
            self.theme = self.theme.toggled();
            apply_theme(&self.document, self.theme);
            if let Err(e) = self.theme.save(self.app.store_mut()) {
                log::warn!("Failed to save theme: {}", e);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        // The same bundle is imported by the service worker, which has no window
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::info!("No document, skipping page start-up");
            return;
        };

        log::info!("Reading Bingo starting...");

        let seed = platform::time_seed();
        let page = Rc::new(RefCell::new(Page::new(document.clone(), seed)));
        page.borrow_mut().start();

        setup_grid_clicks(&document, page.clone());
        setup_button(&document, "shuffle-btn", page.clone(), Page::shuffle);
        setup_button(&document, "reset-btn", page.clone(), Page::reset);
        setup_button(&document, "theme-toggle", page.clone(), Page::toggle_theme);
        setup_share_button(&document, page.clone());
        setup_resize(page);

        platform::register_service_worker("./sw.js");

        log::info!("Reading Bingo running!");
    }

    /// One delegated listener on the grid; cells carry their index
    fn setup_grid_clicks(document: &Document, page: Rc<RefCell<Page>>) {
        let Some(grid) = document.get_element_by_id("bingo-grid") else {
            log::warn!("No #bingo-grid element, board is not clickable");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let index = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".bingo-cell").ok().flatten())
                .and_then(|cell| cell.get_attribute(INDEX_ATTR))
                .and_then(|attr| attr.parse::<usize>().ok());
            if let Some(index) = index {
                page.borrow_mut().toggle_mark(index);
            }
        });
        let _ = grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_button(
        document: &Document,
        id: &str,
        page: Rc<RefCell<Page>>,
        action: fn(&mut Page),
    ) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("No #{} button", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            action(&mut page.borrow_mut());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_share_button(document: &Document, page: Rc<RefCell<Page>>) {
        let Some(btn) = document.get_element_by_id("share-btn") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let message = page.borrow().app.share_text();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = platform::deliver(&message).await;
                log::info!("Share outcome: {:?}", outcome);
                if let Some(toast) = outcome.message() {
                    show_toast(toast);
                }
            });
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(page: Rc<RefCell<Page>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Some(confetti) = &page.borrow().confetti {
                confetti.borrow_mut().resize();
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Native preview: mark the cells given as arguments and print the board
/// and the share text.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use reading_bingo::consts::BOARD_SIDE;
    use reading_bingo::{BingoApp, MemoryStore};

    env_logger::init();
    log::info!("Reading Bingo (native) starting...");
    log::info!("Native mode is a text preview - run with `trunk serve` for the web version");

    let mut app = BingoApp::initialize(MemoryStore::new());
    for arg in std::env::args().skip(1) {
        let outcome = arg
            .parse::<usize>()
            .map_err(|e| e.to_string())
            .and_then(|index| app.toggle_mark(index).map_err(|e| e.to_string()));
        match outcome {
            Ok(outcome) => {
                if let Some(message) = outcome.transition.message() {
                    println!("🎉 {}", message);
                }
            }
            Err(e) => eprintln!("Skipping {:?}: {}", arg, e),
        }
    }

    let board = app.board();
    let winners = board.report().winning_cells();
    println!();
    for (row_index, row) in board.tasks.chunks(BOARD_SIDE).enumerate() {
        for (col, task) in row.iter().enumerate() {
            let index = row_index * BOARD_SIDE + col;
            let mark = match (board.marked[index], winners[index]) {
                (_, true) => '★',
                (true, false) => '■',
                (false, false) => '□',
            };
            println!("{} {:>2}  {}", mark, index, task);
        }
        println!();
    }
    println!("{}", app.share_text());
}
