/// Everything the state machine senses in one tick. Ephemeral — built fresh
/// each tick, read-only to the machine.
///
/// Axis values are clamped here, at the collaborator boundary; the state
/// machine assumes they are already in [-1, 1].
#[derive(Clone, Copy, Debug, Default)]
pub struct InputSnapshot {
    /// Downward probe found walkable ground within range.
    pub grounded: bool,
    pub jump_held: bool,
    pub attack_held: bool,
    /// Horizontal movement axis in [-1, 1]. Sign drives facing.
    pub horizontal_axis: f32,
    /// Vertical movement axis in [-1, 1]. Negative means crouch intent.
    pub vertical_axis: f32,
    /// Edge-triggered hazard contact. Latched into the character's
    /// pending-hit flag during sensing, then cleared by the consumer.
    pub hit: bool,
}

impl InputSnapshot {
    /// Clamp both axes into [-1, 1]. Input devices and scripts go through
    /// this so out-of-range values never reach the state machine.
    pub fn clamped(mut self) -> Self {
        self.horizontal_axis = self.horizontal_axis.clamp(-1.0, 1.0);
        self.vertical_axis = self.vertical_axis.clamp(-1.0, 1.0);
        self
    }

    pub fn crouch_held(&self) -> bool {
        self.vertical_axis < 0.0
    }
}

// ---------------------------------------------------------------------------
// Scripted input — deterministic timeline for the demo binary and tests
// ---------------------------------------------------------------------------

/// One segment of a scripted timeline: hold these controls for `duration`
/// seconds. Sensed fields (`grounded`, `hit`) are overwritten by the host
/// loop each tick.
#[derive(Clone, Copy)]
pub struct ScriptSegment {
    pub duration: f32,
    pub controls: InputSnapshot,
}

/// Plays back a fixed list of control segments by elapsed time. Past the end
/// of the script it keeps returning neutral input.
pub struct ScriptedInput {
    segments: Vec<ScriptSegment>,
}

impl ScriptedInput {
    pub fn new(segments: Vec<ScriptSegment>) -> Self {
        Self { segments }
    }

    /// Controls active at time `t` (seconds since script start).
    pub fn sample(&self, t: f32) -> InputSnapshot {
        let mut start = 0.0;
        for segment in &self.segments {
            if t < start + segment.duration {
                return segment.controls.clamped();
            }
            start += segment.duration;
        }
        InputSnapshot::default()
    }

    pub fn total_duration(&self) -> f32 {
        self.segments.iter().map(|s| s.duration).sum()
    }
}
