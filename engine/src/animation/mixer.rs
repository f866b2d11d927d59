//! Animation Mixer
//!
//! One [`ClipState`] per named clip. Fades are linear weight ramps advanced by
//! the mixer's own delta time, so their length does not depend on frame rate.
//!
//! # Example
//!
//! ```rust,ignore
//! use stride_engine::animation::Animator;
//!
//! let mut animator = Animator::new(["Idle", "Walk", "Run"]);
//! animator.play("Idle");
//! animator.cross_fade("Idle", "Walk", 0.5);
//! animator.update(0.25);
//! assert_eq!(animator.weight("Walk"), 0.5);
//! ```

use std::collections::HashMap;

/// Most recent events kept by the mixer. Older ones are dropped first.
pub const EVENT_LOG_CAPACITY: usize = 64;

/// Something observable the mixer did.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationEvent {
    /// A clip started at full weight
    Play { clip: String },
    /// `from` started fading out while `to` fades in from zero
    CrossFade {
        from: String,
        to: String,
        duration: f32,
    },
}

/// In-progress linear weight ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub from_weight: f32,
    pub to_weight: f32,
    pub duration: f32,
    pub elapsed: f32,
}

impl Fade {
    fn weight(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to_weight;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from_weight + (self.to_weight - self.from_weight) * t
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Playback state of one clip.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClipState {
    /// Blend weight in `[0, 1]`
    pub weight: f32,
    /// Whether the clip is advancing
    pub playing: bool,
    /// Active fade, if any
    pub fade: Option<Fade>,
}

/// Named-clip weight mixer.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    clips: HashMap<String, ClipState>,
    events: Vec<AnimationEvent>,
}

impl Animator {
    /// Create a mixer over `clip_names`, all stopped at weight 0.
    pub fn new<I, S>(clip_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let clips = clip_names
            .into_iter()
            .map(|name| (name.into(), ClipState::default()))
            .collect();
        Self {
            clips,
            events: Vec::new(),
        }
    }

    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    /// Number of known clips.
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    fn record(&mut self, event: AnimationEvent) {
        if self.events.len() >= EVENT_LOG_CAPACITY {
            let overflow = self.events.len() + 1 - EVENT_LOG_CAPACITY;
            self.events.drain(..overflow);
        }
        self.events.push(event);
    }

    fn clip_mut(&mut self, name: &str) -> Option<&mut ClipState> {
        let clip = self.clips.get_mut(name);
        if clip.is_none() {
            tracing::warn!(clip = name, "unknown animation clip");
        }
        clip
    }

    /// Start `name` immediately at full weight.
    pub fn play(&mut self, name: &str) -> bool {
        let Some(clip) = self.clip_mut(name) else {
            return false;
        };
        clip.weight = 1.0;
        clip.playing = true;
        clip.fade = None;
        self.record(AnimationEvent::Play {
            clip: name.to_string(),
        });
        true
    }

    /// Ramp `name` from its current weight to 0 over `duration`.
    pub fn fade_out(&mut self, name: &str, duration: f32) -> bool {
        let Some(clip) = self.clip_mut(name) else {
            return false;
        };
        clip.fade = Some(Fade {
            from_weight: clip.weight,
            to_weight: 0.0,
            duration,
            elapsed: 0.0,
        });
        true
    }

    /// Reset `name` to weight 0, start it, and ramp to 1 over `duration`.
    pub fn fade_in(&mut self, name: &str, duration: f32) -> bool {
        let Some(clip) = self.clip_mut(name) else {
            return false;
        };
        clip.weight = 0.0;
        clip.playing = true;
        clip.fade = Some(Fade {
            from_weight: 0.0,
            to_weight: 1.0,
            duration,
            elapsed: 0.0,
        });
        true
    }

    /// Fade `from` out and `to` in concurrently over `duration`.
    ///
    /// Returns `false` and records nothing when `to` is not a known clip.
    pub fn cross_fade(&mut self, from: &str, to: &str, duration: f32) -> bool {
        self.fade_out(from, duration);
        if !self.fade_in(to, duration) {
            return false;
        }
        tracing::debug!(from, to, duration, "animation cross-fade");
        self.record(AnimationEvent::CrossFade {
            from: from.to_string(),
            to: to.to_string(),
            duration,
        });
        true
    }

    /// Advance all fades by `dt`. Clips that reach weight 0 stop playing.
    pub fn update(&mut self, dt: f32) {
        if dt < 0.0 {
            return;
        }
        for clip in self.clips.values_mut() {
            let Some(mut fade) = clip.fade else {
                continue;
            };
            fade.elapsed += dt;
            clip.weight = fade.weight();
            if fade.finished() {
                clip.fade = None;
                if clip.weight <= 0.0 {
                    clip.playing = false;
                }
            } else {
                clip.fade = Some(fade);
            }
        }
    }

    /// Current weight of `name` (0 for unknown clips).
    pub fn weight(&self, name: &str) -> f32 {
        self.clips.get(name).map_or(0.0, |clip| clip.weight)
    }

    pub fn is_playing(&self, name: &str) -> bool {
        self.clips.get(name).is_some_and(|clip| clip.playing)
    }

    pub fn clip(&self, name: &str) -> Option<&ClipState> {
        self.clips.get(name)
    }

    /// Events recorded since the last drain, at most [`EVENT_LOG_CAPACITY`].
    pub fn events(&self) -> &[AnimationEvent] {
        &self.events
    }

    /// Take all recorded events.
    pub fn drain_events(&mut self) -> Vec<AnimationEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator() -> Animator {
        let mut animator = Animator::new(["Idle", "Walk", "Run"]);
        animator.play("Idle");
        animator.drain_events();
        animator
    }

    #[test]
    fn test_play_sets_full_weight() {
        let animator = animator();
        assert_eq!(animator.weight("Idle"), 1.0);
        assert!(animator.is_playing("Idle"));
        assert!(!animator.is_playing("Walk"));
    }

    #[test]
    fn test_cross_fade_halfway() {
        let mut animator = animator();
        animator.cross_fade("Idle", "Walk", 0.5);
        animator.update(0.25);

        assert!((animator.weight("Idle") - 0.5).abs() < 1e-6);
        assert!((animator.weight("Walk") - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cross_fade_completes() {
        let mut animator = animator();
        animator.cross_fade("Idle", "Walk", 0.5);
        animator.update(0.3);
        animator.update(0.3);

        assert_eq!(animator.weight("Idle"), 0.0);
        assert!(!animator.is_playing("Idle"));
        assert_eq!(animator.weight("Walk"), 1.0);
        assert!(animator.is_playing("Walk"));
        assert!(animator.clip("Walk").unwrap().fade.is_none());
    }

    #[test]
    fn test_fade_in_restarts_from_zero() {
        let mut animator = animator();
        animator.fade_in("Idle", 1.0);
        assert_eq!(animator.weight("Idle"), 0.0);
        animator.update(0.5);
        assert!((animator.weight("Idle") - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut animator = animator();
        animator.cross_fade("Idle", "Run", 0.0);
        animator.update(0.0);
        assert_eq!(animator.weight("Idle"), 0.0);
        assert_eq!(animator.weight("Run"), 1.0);
    }

    #[test]
    fn test_cross_fade_event_recorded() {
        let mut animator = animator();
        animator.cross_fade("Walk", "Run", 0.5);
        assert_eq!(
            animator.drain_events(),
            vec![AnimationEvent::CrossFade {
                from: "Walk".to_string(),
                to: "Run".to_string(),
                duration: 0.5,
            }]
        );
        assert!(animator.events().is_empty());
    }

    #[test]
    fn test_unknown_clip_ignored() {
        let mut animator = animator();
        assert!(!animator.play("Dance"));
        assert!(!animator.fade_in("Dance", 0.5));
        assert_eq!(animator.weight("Dance"), 0.0);
        assert!(animator.events().is_empty());
    }

    #[test]
    fn test_cross_fade_to_unknown_clip_not_recorded() {
        let mut animator = animator();
        assert!(!animator.cross_fade("Idle", "Dance", 0.5));
        assert!(animator.events().is_empty());

        // A missing source still lets the target fade in
        assert!(animator.cross_fade("Dance", "Walk", 0.5));
        assert_eq!(animator.events().len(), 1);
    }

    #[test]
    fn test_event_log_keeps_newest() {
        let mut animator = animator();
        let clips = ["Idle", "Walk"];
        for i in 0..EVENT_LOG_CAPACITY * 3 {
            animator.cross_fade(clips[i % 2], clips[(i + 1) % 2], 0.5);
        }
        animator.play("Run");

        let events = animator.events();
        assert_eq!(events.len(), EVENT_LOG_CAPACITY);
        assert_eq!(
            events.last(),
            Some(&AnimationEvent::Play {
                clip: "Run".to_string()
            })
        );
    }
}
