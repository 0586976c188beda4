use clap::Parser;
use clap_complete::Shell;

/// Arguments for the completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bash:\n    multiarch-audit completions bash > ~/.bash_completion.d/multiarch-audit\n\n\
                  Zsh:\n    multiarch-audit completions zsh > ~/.zfunc/_multiarch-audit")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
