//! Browser shell
//!
//! Wires the page (landing screen, name form, canvas, HUD) to a
//! `GameSession` and drives it from `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, Window};

use super::StartupError;
use crate::audio::{AudioManager, SoundEffect};
use crate::consts::{GAME_HEIGHT, GAME_WIDTH};
use crate::renderer::{RenderState, build_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameSession, Key, Side};

const CANVAS_ID: &str = "game-canvas";

/// HUD elements, looked up once at startup
struct Hud {
    p1: Element,
    p2: Element,
    countdown: Element,
    pause: Element,
}

impl Hud {
    fn find(document: &Document) -> Result<Self, StartupError> {
        Ok(Self {
            p1: element(document, "hud-p1")?,
            p2: element(document, "hud-p2")?,
            countdown: element(document, "countdown")?,
            pause: element(document, "pause-overlay")?,
        })
    }

    /// Update HUD elements in DOM
    fn update(&self, session: &GameSession) {
        let Some(view) = session.view() else { return };

        for (el, side) in [(&self.p1, Side::Left), (&self.p2, Side::Right)] {
            let player = view.scoreboard.player(side);
            let text = format!("{}: {}", player.name, player.score);
            if el.text_content().as_deref() != Some(text.as_str()) {
                el.set_text_content(Some(&text));
            }
        }

        let countdown = view.countdown_text();
        self.countdown.set_text_content(Some(&countdown));
        set_hidden(&self.countdown, countdown.is_empty());
        set_hidden(&self.pause, !view.paused);
    }
}

/// Game instance holding all state
struct Game {
    session: GameSession,
    render_state: RenderState,
    audio: AudioManager,
    hud: Hud,
    settings: Settings,
    /// The frame loop has been scheduled
    running: bool,
}

impl Game {
    fn play_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.audio.play(effect);
        }
    }

    fn frame(&mut self, now_ms: f64) {
        let events = self.session.frame(now_ms);
        self.play_events(&events);
        self.render();
        self.hud.update(&self.session);
    }

    /// Render the current frame
    fn render(&mut self) {
        let Some(view) = self.session.view() else { return };
        let vertices = build_scene(&view, self.settings.quality);

        match self.render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }

    /// Start a match from the name form; returns true if the loop must be started
    fn start_match(&mut self, p1_name: &str, p2_name: &str) -> bool {
        let seed = js_sys::Date::now() as u64;
        let events = self.session.start_match(p1_name, p2_name, seed, now_ms());
        self.play_events(&events);
        self.hud.update(&self.session);
        !std::mem::replace(&mut self.running, true)
    }
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn element(document: &Document, id: &'static str) -> Result<Element, StartupError> {
    document
        .get_element_by_id(id)
        .ok_or(StartupError::MissingElement(id))
}

fn typed<T: JsCast>(document: &Document, id: &'static str) -> Result<T, StartupError> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| StartupError::WrongElementType(id))
}

fn set_hidden(el: &Element, hidden: bool) {
    let _ = el.class_list().toggle_with_force("hidden", hidden);
}

fn listen<T>(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(T) + 'static)
where
    T: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(T)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub async fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }

    log::info!("Neon Pong starting...");

    match start().await {
        Ok(()) => log::info!("Neon Pong ready"),
        Err(e) => log::error!("Startup failed: {e}"),
    }
}

async fn start() -> Result<(), StartupError> {
    let window = web_sys::window().ok_or(StartupError::NoWindow)?;
    let document = window.document().ok_or(StartupError::NoDocument)?;

    let canvas: HtmlCanvasElement = typed(&document, CANVAS_ID)?;
    let settings = Settings::from_page(&canvas);

    // 800x600 logical pixels, backed at device resolution
    let dpr = window.device_pixel_ratio().max(1.0);
    let width = (GAME_WIDTH * dpr).round() as u32;
    let height = (GAME_HEIGHT * dpr).round() as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    let _ = canvas.set_attribute(
        "style",
        &format!("width: {GAME_WIDTH}px; height: {GAME_HEIGHT}px"),
    );

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    });
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await?;
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let render_state = RenderState::new(surface, &adapter, width, height).await?;
    let hud = Hud::find(&document)?;
    let auto_pause = settings.auto_pause_on_blur;

    let game = Rc::new(RefCell::new(Game {
        session: GameSession::new(&settings),
        render_state,
        audio: AudioManager::new(&settings),
        hud,
        settings,
        running: false,
    }));

    setup_menu(&document, game.clone())?;
    setup_keyboard(&window, game.clone());
    if auto_pause {
        setup_auto_pause(&window, &document, game);
    }
    Ok(())
}

/// Landing page, name form and the match start
fn setup_menu(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), StartupError> {
    let hero = element(document, "hero")?;
    let board = element(document, "board")?;
    let modal = element(document, "name-modal")?;
    let form = element(document, "name-form")?;
    let start_btn = element(document, "btn-start")?;
    let cancel_btn = element(document, "cancel-modal")?;
    let p1: HtmlInputElement = typed(document, "name-p1")?;
    let p2: HtmlInputElement = typed(document, "name-p2")?;

    // Start: prefill names and open the form. This click is also the
    // gesture that lets the audio context start.
    {
        let game = game.clone();
        let modal = modal.clone();
        let (p1, p2) = (p1.clone(), p2.clone());
        listen(&start_btn, "click", move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            g.audio.unlock();
            let names = g.session.names();
            p1.set_value(&names.p1.name);
            p2.set_value(&names.p2.name);
            set_hidden(&modal, false);
            let _ = p1.focus();
        });
    }

    {
        let modal = modal.clone();
        listen(&cancel_btn, "click", move |_event: web_sys::Event| {
            set_hidden(&modal, true);
        });
    }

    listen(&form, "submit", move |event: web_sys::Event| {
        event.prevent_default();
        set_hidden(&modal, true);
        set_hidden(&hero, true);
        set_hidden(&board, false);

        let start_loop = game.borrow_mut().start_match(&p1.value(), &p2.value());
        if start_loop {
            request_animation_frame(game.clone());
        }
    });

    Ok(())
}

fn setup_keyboard(window: &Window, game: Rc<RefCell<Game>>) {
    for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
        let game = game.clone();
        listen(window, event_name, move |event: KeyboardEvent| {
            // Typing a name must not steer paddles or toggle pause
            let in_form = event
                .target()
                .is_some_and(|t| t.has_type::<HtmlInputElement>());
            if in_form {
                return;
            }
            let Some(key) = Key::from_dom_event(&event.key(), &event.code()) else {
                return;
            };
            if key.suppresses_default() {
                event.prevent_default();
            }
            // Held space repeats keydown; only the first press toggles
            if key == Key::Space && pressed && event.repeat() {
                return;
            }
            game.borrow_mut().session.set_key_state(key, pressed, now_ms());
        });
    }
}

fn auto_pause(game: &Rc<RefCell<Game>>, reason: &str) {
    let mut g = game.borrow_mut();
    if g.session.has_match() && !g.session.is_paused() {
        g.session.set_paused(true, now_ms());
        g.hud.update(&g.session);
        log::info!("Auto-paused ({reason})");
    }
}

fn setup_auto_pause(window: &Window, document: &Document, game: Rc<RefCell<Game>>) {
    // Visibility change (tab switch, minimize)
    {
        let game = game.clone();
        let document_clone = document.clone();
        listen(document, "visibilitychange", move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                auto_pause(&game, "tab hidden");
            }
        });
    }

    // Window blur (click outside)
    listen(window, "blur", move |_event: web_sys::FocusEvent| {
        auto_pause(&game, "window blur");
    });
}

fn request_animation_frame(game: Rc<RefCell<Game>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        game_loop(game, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
    game.borrow_mut().frame(time);
    request_animation_frame(game);
}
