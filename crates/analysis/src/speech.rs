//! Speech engine binding.
//!
//! Wraps the platform speech engine behind the `SpeechSynthesizer`
//! contract. Utterances are queued with the engine's own scheduler, so
//! `speak` returns without waiting for playback to finish.

use pdfnlp_core::{Error, Result, SpeechSynthesizer};
use std::sync::Mutex;
use tts::Tts;

/// Synthesizer backed by the platform speech engine.
pub struct EngineSynthesizer {
    engine: Mutex<Tts>,
}

impl EngineSynthesizer {
    /// Initialize the platform speech engine.
    pub fn new() -> Result<Self> {
        let engine = Tts::default().map_err(|e| Error::SpeechError(e.to_string()))?;
        Ok(Self {
            engine: Mutex::new(engine),
        })
    }
}

impl SpeechSynthesizer for EngineSynthesizer {
    fn speak(&self, text: &str) -> Result<()> {
        let mut engine = self
            .engine
            .lock()
            .map_err(|_| Error::SpeechError("speech engine lock poisoned".into()))?;

        // Interrupt any utterance still playing from a previous press.
        engine
            .speak(text, true)
            .map_err(|e| Error::SpeechError(e.to_string()))?;

        Ok(())
    }
}
