//! Song records as seen from the chart renderer.
//!
//! Storage lives elsewhere. A record only has to hand over its music text, which the renderer
//! never rewrites, and optionally a free-form tempo string.

/// A stored song whose music text can be rendered.
pub trait SongRecord {
    /// The chart markup exactly as stored.
    fn music_text(&self) -> &str;

    /// Tempo as entered by the user, e.g. `"♩ = 96"` or `"120 bpm"`.
    fn tempo(&self) -> Option<&str> {
        None
    }

    /// Beats per minute for the metronome, if the tempo string holds a number.
    fn bpm(&self) -> Option<u32> {
        self.tempo().and_then(tempo_bpm)
    }
}

/// First run of ASCII digits in a tempo string.
pub fn tempo_bpm(tempo: &str) -> Option<u32> {
    let start = tempo.find(|c: char| c.is_ascii_digit())?;
    let digits = &tempo[start..];
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    digits[..len].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stored {
        music: String,
        tempo: Option<String>,
    }

    impl SongRecord for Stored {
        fn music_text(&self) -> &str {
            &self.music
        }

        fn tempo(&self) -> Option<&str> {
            self.tempo.as_deref()
        }
    }

    #[test]
    fn bpm_from_tempo_strings() {
        assert_eq!(tempo_bpm("120"), Some(120));
        assert_eq!(tempo_bpm("♩ = 96 bpm"), Some(96));
        assert_eq!(tempo_bpm("Moderato (108-112)"), Some(108));
        assert_eq!(tempo_bpm("slow"), None);
        assert_eq!(tempo_bpm(""), None);
    }

    #[test]
    fn overflowing_tempo_is_none() {
        assert_eq!(tempo_bpm("99999999999999"), None);
    }

    #[test]
    fn record_bpm() {
        let song = Stored {
            music: "|C |".to_string(),
            tempo: Some("Allegro 132".to_string()),
        };
        assert_eq!(song.bpm(), Some(132));

        let untimed = Stored {
            music: String::new(),
            tempo: None,
        };
        assert_eq!(untimed.bpm(), None);
    }
}
