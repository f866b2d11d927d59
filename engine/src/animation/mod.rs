//! Animation Module
//!
//! Weight bookkeeping for the character's named animation clips. Skinning and
//! playback of actual keyframes belong to the renderer; this module decides
//! which clips are audible, at what weight, and records every cross-fade.

pub mod mixer;

pub use mixer::{AnimationEvent, Animator, ClipState, EVENT_LOG_CAPACITY, Fade};
