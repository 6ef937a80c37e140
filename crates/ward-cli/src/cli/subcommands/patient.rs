use clap::Subcommand;

/// Patient record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PatientCommands {
    /// Add a new patient.
    Add {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        diagnosis: String,
        #[arg(long, default_value = "")]
        medications: String,
    },
    /// List patients on file.
    List,
}
