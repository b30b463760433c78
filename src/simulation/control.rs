//! Control intents and scripted input
//!
//! Input collaborators translate key presses and button clicks into
//! [`ControlIntent`]s. The world queues them and drains the queue once per tick.

use std::collections::VecDeque;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use super::types::{Precipitation, TimeOfDay};

/// Target speed added per accelerate intent without boost
pub const ACCELERATION_STEP: f32 = 2.0;

/// Target speed added per accelerate intent with boost
pub const BOOST_ACCELERATION_STEP: f32 = 4.0;

/// Target speed removed per brake intent
pub const BRAKE_STEP: f32 = 2.0;

/// Ticks between repeats of a held key (50 ms at 60 ticks per second)
pub const KEY_REPEAT_TICKS: u32 = 3;

/// A discrete command from the control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIntent {
    Start,
    Stop,
    Accelerate,
    Brake,
    EmergencyStop,
    ToggleBoost,
    SelectWeather(Precipitation),
    SelectTimeOfDay(TimeOfDay),
    AddTrafficCars(usize),
    AddPedestrians(usize),
}

impl ControlIntent {
    /// Intents that drive the player vehicle. These are ignored while stopped.
    pub fn is_driving(self) -> bool {
        matches!(
            self,
            ControlIntent::Accelerate
                | ControlIntent::Brake
                | ControlIntent::EmergencyStop
                | ControlIntent::ToggleBoost
        )
    }
}

/// FIFO of intents waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    pending: VecDeque<ControlIntent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: ControlIntent) {
        self.pending.push_back(intent);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending intent in submission order
    pub fn drain(&mut self) -> impl Iterator<Item = ControlIntent> + '_ {
        self.pending.drain(..)
    }
}

/// One slot of a control script: an intent, or a slot where nothing is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Intent(ControlIntent),
    Idle,
}

/// A scripted sequence of control steps for headless runs.
///
/// Written as comma-separated tokens, each optionally repeated with `*N`:
///
/// `start, accel*30, boost, accel*20, wait*40, weather:rain, time:night, cars:2, brake*10, halt, stop`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlScript {
    steps: VecDeque<ScriptStep>,
}

impl ControlScript {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Next step to play, if any remain
    pub fn next_step(&mut self) -> Option<ScriptStep> {
        self.steps.pop_front()
    }
}

impl FromStr for ControlScript {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut steps = VecDeque::new();
        for token in s.split([',', ';']).map(str::trim).filter(|t| !t.is_empty()) {
            let (body, repeat) = match token.split_once('*') {
                Some((body, count)) => {
                    let count: usize = count
                        .trim()
                        .parse()
                        .with_context(|| format!("invalid repeat count in '{}'", token))?;
                    (body.trim(), count)
                }
                None => (token, 1),
            };
            let step = parse_step(body).with_context(|| format!("invalid script step '{}'", token))?;
            steps.extend(std::iter::repeat(step).take(repeat));
        }
        Ok(Self { steps })
    }
}

fn parse_step(body: &str) -> Result<ScriptStep> {
    if let Some((key, value)) = body.split_once(':') {
        let value = value.trim();
        let intent = match key.trim().to_ascii_lowercase().as_str() {
            "weather" => ControlIntent::SelectWeather(value.parse()?),
            "time" => ControlIntent::SelectTimeOfDay(value.parse()?),
            "cars" => ControlIntent::AddTrafficCars(value.parse().context("car count")?),
            "peds" => ControlIntent::AddPedestrians(value.parse().context("pedestrian count")?),
            other => bail!("unknown setting '{}'", other),
        };
        return Ok(ScriptStep::Intent(intent));
    }

    let intent = match body.to_ascii_lowercase().as_str() {
        "wait" => return Ok(ScriptStep::Idle),
        "start" => ControlIntent::Start,
        "stop" => ControlIntent::Stop,
        "accel" | "up" => ControlIntent::Accelerate,
        "brake" | "down" => ControlIntent::Brake,
        "halt" | "space" => ControlIntent::EmergencyStop,
        "boost" => ControlIntent::ToggleBoost,
        "car" => ControlIntent::AddTrafficCars(1),
        "ped" => ControlIntent::AddPedestrians(1),
        other => bail!("unknown command '{}'", other),
    };
    Ok(ScriptStep::Intent(intent))
}
