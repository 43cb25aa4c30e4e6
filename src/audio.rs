//! Audio service wrapper
//!
//! Sound is optional. The backend may fail at any call; `AudioManager`
//! swallows every failure, logs it, and turns audio off if music breaks.

use thiserror::Error;

/// Background music track name
pub const MUSIC_TRACK: &str = "bgm";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Menu button pressed / back to menu
    Click,
    /// Coin collected
    Pickup,
    /// Hero touched a slime
    Hit,
}

impl SoundEffect {
    /// Resource name the backend plays
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Click => "click",
            SoundEffect::Pickup => "pickup",
            SoundEffect::Hit => "hit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AudioError {
    #[error("sound '{0}' not found")]
    MissingSound(String),
    #[error("music track '{0}' not found")]
    MissingTrack(String),
    #[error("audio device unavailable: {0}")]
    Device(String),
}

/// Playback capability supplied by the platform
pub trait AudioBackend {
    /// Fire-and-forget sound effect
    fn play_sound(&mut self, name: &str) -> Result<(), AudioError>;
    fn play_music(&mut self, track: &str) -> Result<(), AudioError>;
    fn set_music_volume(&mut self, volume: f32) -> Result<(), AudioError>;
    fn stop_music(&mut self) -> Result<(), AudioError>;
}

/// Backend that plays nothing and only logs what it was asked to do
#[derive(Debug, Default)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn play_sound(&mut self, name: &str) -> Result<(), AudioError> {
        log::debug!("sfx: {name}");
        Ok(())
    }

    fn play_music(&mut self, track: &str) -> Result<(), AudioError> {
        log::debug!("music: play {track}");
        Ok(())
    }

    fn set_music_volume(&mut self, volume: f32) -> Result<(), AudioError> {
        log::debug!("music: volume {volume:.2}");
        Ok(())
    }

    fn stop_music(&mut self) -> Result<(), AudioError> {
        log::debug!("music: stop");
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    enabled: bool,
    music_volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(SilentBackend), true, crate::consts::MUSIC_VOLUME)
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>, enabled: bool, music_volume: f32) -> Self {
        Self {
            backend,
            enabled,
            music_volume: music_volume.clamp(0.0, 1.0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    /// Play a sound effect if audio is on. Failures are logged and ignored.
    pub fn play(&mut self, effect: SoundEffect) {
        if !self.enabled {
            return;
        }
        if let Err(err) = self.backend.play_sound(effect.name()) {
            log::warn!("SFX error ({}): {err}", effect.name());
        }
    }

    /// Turn audio on (start music) or off (stop music).
    ///
    /// If the music backend fails, audio ends up disabled.
    pub fn set_music(&mut self, on: bool) {
        self.enabled = on;
        let result = if on {
            self.backend
                .play_music(MUSIC_TRACK)
                .and_then(|()| self.backend.set_music_volume(self.music_volume))
        } else {
            self.backend.stop_music()
        };

        if let Err(err) = result {
            log::warn!("Music error: {err} - audio disabled");
            self.enabled = false;
        }
    }

    pub fn toggle(&mut self) {
        let on = !self.enabled;
        self.set_music(on);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::RecordingBackend;
    use super::*;

    #[test]
    fn test_play_respects_enabled() {
        let backend = RecordingBackend::default();
        let mut audio = AudioManager::new(Box::new(backend.clone()), false, 0.6);
        audio.play(SoundEffect::Pickup);
        assert!(backend.calls().is_empty());

        audio.set_music(true);
        audio.play(SoundEffect::Pickup);
        assert_eq!(backend.calls(), vec!["music:bgm", "volume:0.6", "sound:pickup"]);
    }

    #[test]
    fn test_sound_failure_keeps_audio_on() {
        let backend = RecordingBackend {
            fail_sounds: true,
            ..Default::default()
        };
        let mut audio = AudioManager::new(Box::new(backend), true, 0.6);
        audio.play(SoundEffect::Hit);
        assert!(audio.is_enabled());
    }

    #[test]
    fn test_music_failure_disables_audio() {
        let backend = RecordingBackend {
            fail_music: true,
            ..Default::default()
        };
        let mut audio = AudioManager::new(Box::new(backend.clone()), false, 0.6);
        audio.toggle();
        assert!(!audio.is_enabled());

        // Stopping can fail too; audio stays off
        let mut audio = AudioManager::new(Box::new(backend), true, 0.6);
        audio.set_music(false);
        assert!(!audio.is_enabled());
    }

    #[test]
    fn test_toggle_off_stops_music() {
        let backend = RecordingBackend::default();
        let mut audio = AudioManager::new(Box::new(backend.clone()), true, 2.0);
        assert_eq!(audio.music_volume(), 1.0);
        audio.toggle();
        assert!(!audio.is_enabled());
        assert_eq!(backend.calls(), vec!["stop"]);
    }
}
