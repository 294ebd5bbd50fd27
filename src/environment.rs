use crate::config::Config;
use crate::display::Display;
use crate::input::{Input, InputEvent};
use crate::interpreter::{Chip8Interpreter, StepResult};
use crate::sound::Sound;
use std::error::Error;
use std::time::Instant;
use tracing::{debug, info, warn};

/// why the main loop gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// the user asked to stop
    Quit,
    /// ran for as many frames as we were told to
    FrameLimit,
}

/// Sets everything up and runs the main loop. Each frame:
///
///  * hand any key events to the interpreter
///  * run a batch of instructions (fewer if one of them waits for a key)
///  * tick the timers once, and beep or not to match
///  * redraw, then sleep out whatever's left of the frame
pub struct Environment<'a> {
    interpreter: Chip8Interpreter,
    display: &'a mut dyn Display,
    input: &'a mut dyn Input,
    sound: &'a mut dyn Sound,
    config: Config,
    frames: u64,
}

impl<'a> Environment<'a> {
    pub fn new(
        interpreter: Chip8Interpreter,
        display: &'a mut dyn Display,
        input: &'a mut dyn Input,
        sound: &'a mut dyn Sound,
        config: Config,
    ) -> Self {
        Environment {
            interpreter,
            display,
            input,
            sound,
            config,
            frames: 0,
        }
    }

    /// go until told to stop or something breaks
    pub fn run(&mut self) -> Result<Exit, Box<dyn Error>> {
        info!(
            ipf = self.config.instructions_per_frame,
            hz = self.config.frame_rate_hz,
            "Starting main loop"
        );
        let period = self.config.frame_period();
        let result = loop {
            let started = Instant::now();
            match self.frame() {
                Ok(None) => {}
                Ok(Some(exit)) => break Ok(exit),
                Err(e) => break Err(e),
            }
            if let Some(rest) = period.checked_sub(started.elapsed()) {
                spin_sleep::sleep(rest);
            }
        };
        // don't leave the speaker going, whichever way we got out
        if self.sound.is_beeping() {
            self.sound.stop()?;
        }
        let exit = result?;
        info!(frames = self.frames, ?exit, "Main loop finished");
        Ok(exit)
    }

    /// one frame's worth of work, without the sleep
    pub fn frame(&mut self) -> Result<Option<Exit>, Box<dyn Error>> {
        for event in self.input.poll()? {
            if let Some(exit) = self.handle(event)? {
                return Ok(Some(exit));
            }
        }

        for _ in 0..self.config.instructions_per_frame {
            if let StepResult::Waiting = self.interpreter.step()? {
                break;
            }
        }

        if self.interpreter.tick_timers().sound_stopped {
            debug!("Sound timer ran out");
            if self.sound.is_beeping() {
                self.sound.stop()?;
            }
        } else {
            self.sound.follow_timer(self.interpreter.sound_timer())?;
        }
        self.display.draw(self.interpreter.screen())?;

        self.frames += 1;
        match self.config.max_frames {
            Some(max) if self.frames >= max => Ok(Some(Exit::FrameLimit)),
            _ => Ok(None),
        }
    }

    fn handle(&mut self, event: InputEvent) -> Result<Option<Exit>, Box<dyn Error>> {
        match event {
            InputEvent::Quit => return Ok(Some(Exit::Quit)),
            InputEvent::KeyDown(code) => match self.interpreter.keyboard().map(code) {
                Some(key) => self.interpreter.key_down(key)?,
                None => warn!("Can't map {:?} to a COSMAC key", code),
            },
            InputEvent::KeyUp(code) => {
                if let Some(key) = self.interpreter.keyboard().map(code) {
                    self.interpreter.key_up(key)?;
                }
            }
        }
        Ok(None)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn interpreter(&self) -> &Chip8Interpreter {
        &self.interpreter
    }

    /// finished with the front end; hand back the machine
    pub fn into_interpreter(self) -> Chip8Interpreter {
        self.interpreter
    }
}
