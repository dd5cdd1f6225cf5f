use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "cellsong.toml")]
    pub config: String,

    /// Seed for the random fill
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Generations to evolve before the audition
    #[arg(long, default_value_t = 8)]
    pub generations: u32,

    /// Audition in column order instead of row order
    #[arg(long, default_value_t = false)]
    pub column_order: bool,

    /// Print every intermediate generation
    #[arg(long, default_value_t = false)]
    pub show_steps: bool,

    /// Evolve and print only, skip the audition
    #[arg(long, default_value_t = false)]
    pub no_play: bool,
}
