use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "horalix-pulse",
    version,
    about = "Echocardiography study dashboard and DICOM upload staging"
)]
/// Command-line arguments accepted by the `horalix-pulse` binary.
pub struct CliArgs {
    /// Clinician name shown in the header and used for the avatar initials.
    #[arg(long, env = "PULSE_DOCTOR", default_value = "doctor1")]
    pub doctor: String,

    #[arg(long, env = "PULSE_SPECIALTY", default_value = "Cardiologist")]
    pub specialty: String,

    /// Largest DICOM file accepted for a new study, in megabytes.
    #[arg(long, env = "PULSE_MAX_FILE_SIZE_MB", default_value_t = 500)]
    pub max_file_size_mb: u64,

    /// Simulated round-trip time of the study service, in milliseconds.
    #[arg(long, env = "PULSE_LATENCY_MS", default_value_t = 1500)]
    pub latency_ms: u64,

    /// Date treated as "today" (YYYY-MM-DD). Defaults to the local date.
    #[arg(long, env = "PULSE_AS_OF", value_name = "DATE")]
    pub as_of: Option<String>,
}
