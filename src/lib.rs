#![forbid(unsafe_code)]

pub mod assets;
pub mod clock;
pub mod core;
pub mod decor;
pub mod docs;
pub mod engine;
pub mod error;
pub mod hero;
pub mod resolve;
pub mod scene;
pub mod timeline;

pub use clock::{MediaClock, SyntheticClock, TimeSource};
pub use core::{Insets, Rect, TypeStyle};
pub use decor::{
    DecorAnimator, DecorElement, DecorFrame, DecorTiming, EntryState, ExitStage, v_formation,
};
pub use engine::{CueEngine, EngineFrame, HeroView};
pub use error::{CuelightError, CuelightResult};
pub use hero::{HeroConfig, load_hero_config};
pub use resolve::resolve_refs;
pub use scene::{HeroScene, hero_scene};
pub use timeline::{Cue, Timeline, find_cue};
