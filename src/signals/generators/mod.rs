mod noisy_waveform;
mod waveform;

pub use noisy_waveform::NoisyWaveformGenerator;
pub use waveform::Waveform;
