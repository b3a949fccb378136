use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn build_cli() -> Command {
    Command::new("r53-sweep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Remove Route 53 records that point at a retired alias target")
        .long_about("r53-sweep deletes every record in a hosted zone whose target matches the given alias, except for the zone apex and any names on the keep list. Deleted records are written to a restore file first, and --restore replays such a file to put them back.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("hosted-zone")
                .long("hosted-zone")
                .help("Name of the hosted zone to sweep, e.g. example.com")
                .required_unless_present("restore")
        )
        .arg(
            Arg::new("target-alias")
                .long("target-alias")
                .help("Alias target whose records should be removed, e.g. old-lb.example.net")
                .required_unless_present("restore")
        )
        .arg(
            Arg::new("keep-list")
                .long("keep-list")
                .help("Record names to keep, relative to the zone ('*' keeps everything)")
                .num_args(1..)
                .action(ArgAction::Append)
        )
        .arg(
            Arg::new("dryrun")
                .long("dryrun")
                .help("Show what would be deleted without changing the zone")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("restore")
                .long("restore")
                .help("Recreate the records in a restore file instead of sweeping")
                .conflicts_with_all(["hosted-zone", "target-alias", "keep-list", "dryrun"])
        )
        .arg(
            Arg::new("aws-access-key-id")
                .long("aws-access-key-id")
                .help("AWS access key id (falls back to AWS_ACCESS_KEY_ID)")
        )
        .arg(
            Arg::new("aws-secret-access-key")
                .long("aws-secret-access-key")
                .help("AWS secret access key (falls back to AWS_SECRET_ACCESS_KEY)")
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
        )
}

pub fn get_matches() -> ArgMatches {
    build_cli().get_matches()
}
