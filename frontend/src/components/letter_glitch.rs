use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config;

const GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$&*()-_+=/[]{};:<>.,";
const CHAR_WIDTH: f64 = 10.0;
const CHAR_HEIGHT: f64 = 20.0;
const FONT: &str = "16px monospace";
/// Share of cells re-rolled on every tick.
const UPDATE_RATIO: f64 = 0.05;
const FADE_STEP: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#rgb` or `#rrggbb`.
    pub fn parse_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
        Some(Rgb { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }

    pub fn lerp(self, to: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb { r: mix(self.r, to.r), g: mix(self.g, to.g), b: mix(self.b, to.b) }
    }

    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Cell {
    ch: char,
    from: Rgb,
    to: Rgb,
    progress: f64,
}

impl Cell {
    fn color(&self) -> Rgb {
        self.from.lerp(self.to, self.progress)
    }
}

/// Character grid behind the loading overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct GlitchGrid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    palette: Vec<Rgb>,
    glyphs: Vec<char>,
    smooth: bool,
}

fn pick<T: Copy>(items: &[T], rng: &mut dyn FnMut() -> f64) -> T {
    let index = ((rng() * items.len() as f64) as usize).min(items.len() - 1);
    items[index]
}

impl GlitchGrid {
    /// Grid covering `width` x `height` pixels. An empty palette falls back to white.
    pub fn new(width: f64, height: f64, palette: Vec<Rgb>, smooth: bool, rng: &mut dyn FnMut() -> f64) -> Self {
        let cols = (width.max(0.0) / CHAR_WIDTH).ceil() as usize;
        let rows = (height.max(0.0) / CHAR_HEIGHT).ceil() as usize;
        let palette = if palette.is_empty() { vec![Rgb { r: 255, g: 255, b: 255 }] } else { palette };
        let glyphs: Vec<char> = GLYPHS.chars().collect();
        let cells = (0..cols * rows)
            .map(|_| {
                let color = pick(&palette, rng);
                Cell { ch: pick(&glyphs, rng), from: color, to: color, progress: 1.0 }
            })
            .collect();
        Self { cols, rows, cells, palette, glyphs, smooth }
    }

    #[cfg(test)]
    fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Re-rolls a slice of cells and advances colour fades.
    pub fn tick(&mut self, rng: &mut dyn FnMut() -> f64) {
        if self.cells.is_empty() {
            return;
        }
        let updates = ((self.cells.len() as f64 * UPDATE_RATIO) as usize).max(1);
        for _ in 0..updates {
            let index = ((rng() * self.cells.len() as f64) as usize).min(self.cells.len() - 1);
            let ch = pick(&self.glyphs, rng);
            let target = pick(&self.palette, rng);
            let cell = &mut self.cells[index];
            cell.ch = ch;
            if self.smooth {
                cell.from = cell.color();
                cell.to = target;
                cell.progress = 0.0;
            } else {
                *cell = Cell { ch, from: target, to: target, progress: 1.0 };
            }
        }
        if self.smooth {
            for cell in self.cells.iter_mut().filter(|cell| cell.progress < 1.0) {
                cell.progress = (cell.progress + FADE_STEP).min(1.0);
            }
        }
    }

    fn draw(&self, context: &CanvasRenderingContext2d, width: f64, height: f64) {
        context.clear_rect(0.0, 0.0, width, height);
        context.set_font(FONT);
        context.set_text_baseline("top");
        for (index, cell) in self.cells.iter().enumerate() {
            let x = (index % self.cols) as f64 * CHAR_WIDTH;
            let y = (index / self.cols) as f64 * CHAR_HEIGHT;
            context.set_fill_style_str(&cell.color().css());
            let _ = context.fill_text(&cell.ch.to_string(), x, y);
        }
    }
}

fn default_palette() -> Vec<AttrValue> {
    vec!["#2b4539".into(), "#61dca3".into(), "#61b3dc".into()]
}

#[derive(Properties, PartialEq)]
pub struct LetterGlitchProps {
    #[prop_or(config::GLITCH_SPEED_MS)]
    pub glitch_speed: u32,
    #[prop_or_else(default_palette)]
    pub glitch_colors: Vec<AttrValue>,
    #[prop_or(true)]
    pub smooth: bool,
    #[prop_or(true)]
    pub outer_vignette: bool,
    #[prop_or_default]
    pub center_vignette: bool,
}

fn viewport_size() -> (f64, f64) {
    web_sys::window()
        .and_then(|window| {
            let width = window.inner_width().ok()?.as_f64()?;
            let height = window.inner_height().ok()?.as_f64()?;
            Some((width, height))
        })
        .unwrap_or((0.0, 0.0))
}

struct Surface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    grid: GlitchGrid,
}

impl Surface {
    fn fit(canvas: HtmlCanvasElement, palette: Vec<Rgb>, smooth: bool) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let (width, height) = viewport_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let mut rng = Math::random;
        let grid = GlitchGrid::new(width, height, palette, smooth, &mut rng);
        let surface = Surface { canvas, context, grid };
        surface.redraw();
        Some(surface)
    }

    fn redraw(&self) {
        self.grid.draw(
            &self.context,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }
}

#[function_component(LetterGlitch)]
pub fn letter_glitch(props: &LetterGlitchProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let palette: Vec<Rgb> = props
            .glitch_colors
            .iter()
            .filter_map(|hex| Rgb::parse_hex(hex))
            .collect();
        let smooth = props.smooth;
        use_effect_with_deps(
            move |speed| {
                let surface: Rc<RefCell<Option<Surface>>> = Rc::new(RefCell::new(
                    canvas_ref
                        .cast::<HtmlCanvasElement>()
                        .and_then(|canvas| Surface::fit(canvas, palette.clone(), smooth)),
                ));

                let interval = {
                    let surface = surface.clone();
                    Interval::new(*speed, move || {
                        if let Some(surface) = surface.borrow_mut().as_mut() {
                            let mut rng = Math::random;
                            surface.grid.tick(&mut rng);
                            surface.redraw();
                        }
                    })
                };

                let on_resize = {
                    let surface = surface.clone();
                    Closure::wrap(Box::new(move || {
                        let refitted = canvas_ref
                            .cast::<HtmlCanvasElement>()
                            .and_then(|canvas| Surface::fit(canvas, palette.clone(), smooth));
                        *surface.borrow_mut() = refitted;
                    }) as Box<dyn FnMut()>)
                };
                let window = web_sys::window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    drop(interval);
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            props.glitch_speed,
        );
    }

    html! {
        <div class="letter-glitch">
            <style>
                {r#"
                    .letter-glitch {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        background: #000;
                        overflow: hidden;
                    }
                    .letter-glitch canvas {
                        display: block;
                        width: 100%;
                        height: 100%;
                    }
                    .letter-glitch .outer-vignette {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: radial-gradient(circle, rgba(0,0,0,0) 60%, rgba(0,0,0,1) 100%);
                    }
                    .letter-glitch .center-vignette {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: radial-gradient(circle, rgba(0,0,0,0.8) 0%, rgba(0,0,0,0) 60%);
                    }
                "#}
            </style>
            <canvas ref={canvas_ref} />
            if props.outer_vignette {
                <div class="outer-vignette"></div>
            }
            if props.center_vignette {
                <div class="center-vignette"></div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through a fixed sequence so ticks are reproducible.
    fn seq(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let value = values[i % values.len()];
            i += 1;
            value
        }
    }

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Rgb::parse_hex("#61dca3"), Some(Rgb { r: 0x61, g: 0xdc, b: 0xa3 }));
        assert_eq!(Rgb::parse_hex("#fff"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(Rgb::parse_hex("2b4539"), Some(Rgb { r: 0x2b, g: 0x45, b: 0x39 }));
        assert_eq!(Rgb::parse_hex("#12345"), None);
        assert_eq!(Rgb::parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn lerp_hits_both_ends() {
        let black = Rgb { r: 0, g: 0, b: 0 };
        let white = Rgb { r: 255, g: 255, b: 255 };
        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        assert_eq!(black.lerp(white, 0.5), Rgb { r: 128, g: 128, b: 128 });
        assert_eq!(black.lerp(white, 3.0), white);
    }

    #[test]
    fn grid_covers_the_viewport() {
        let mut rng = seq(&[0.1, 0.7]);
        let grid = GlitchGrid::new(105.0, 40.0, vec![Rgb { r: 1, g: 2, b: 3 }], true, &mut rng);
        assert_eq!(grid.dimensions(), (11, 2));
        assert_eq!(grid.cells.len(), 22);
    }

    #[test]
    fn empty_palette_falls_back_to_white() {
        let mut rng = seq(&[0.0]);
        let grid = GlitchGrid::new(10.0, 20.0, Vec::new(), false, &mut rng);
        assert_eq!(grid.cells[0].color(), Rgb { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn smooth_tick_starts_a_fade() {
        let red = Rgb { r: 255, g: 0, b: 0 };
        let blue = Rgb { r: 0, g: 0, b: 255 };
        // Initial fill draws 0.0 for every pick: every cell red.
        let mut rng = seq(&[0.0]);
        let mut grid = GlitchGrid::new(10.0, 20.0, vec![red, blue], true, &mut rng);
        assert_eq!(grid.cells[0].color(), red);

        // index 0, any glyph, then the blue target.
        let mut rng = seq(&[0.0, 0.0, 0.9]);
        grid.tick(&mut rng);
        let cell = &grid.cells[0];
        assert_eq!(cell.to, blue);
        assert!((cell.progress - FADE_STEP).abs() < f64::EPSILON);
        assert_ne!(cell.color(), blue);
    }

    #[test]
    fn hard_tick_swaps_colour_immediately() {
        let red = Rgb { r: 255, g: 0, b: 0 };
        let blue = Rgb { r: 0, g: 0, b: 255 };
        let mut rng = seq(&[0.0]);
        let mut grid = GlitchGrid::new(10.0, 20.0, vec![red, blue], false, &mut rng);
        let mut rng = seq(&[0.0, 0.0, 0.9]);
        grid.tick(&mut rng);
        assert_eq!(grid.cells[0].color(), blue);
    }

    #[test]
    fn empty_grid_ticks_quietly() {
        let mut rng = seq(&[0.5]);
        let mut grid = GlitchGrid::new(0.0, 0.0, Vec::new(), true, &mut rng);
        grid.tick(&mut rng);
        assert_eq!(grid.dimensions(), (0, 0));
    }
}
