use clap::{value_parser, Arg, ArgAction, Command};

pub fn cli() -> Command {
    Command::new("github-fetch-pullrequest")
        .about(
            "Fetch pull requests from GitHub and prepare them for a rebase workflow.\n\
             With no arguments it lists open pull requests.",
        )
        .arg(
            Arg::new("pr-number")
                .short('n')
                .long("pr-number")
                .value_name("NUMBER")
                .value_parser(value_parser!(u32))
                .help(
                    "Pull request number. Fetches the pull request #NUMBER, creates a separate \
                     branch for it, rebases it on top of its target branch and deletes the \
                     temporary remote",
                ),
        )
        .arg(
            Arg::new("master")
                .short('m')
                .long("master")
                .action(ArgAction::SetTrue)
                .help("Fast-forward merge the rebased branch into master"),
        )
        .arg(
            Arg::new("ignore-dirty")
                .short('i')
                .long("ignore-dirty")
                .action(ArgAction::SetTrue)
                .help("Fetch the pull request without checking the local work tree"),
        )
}
