use clap::{Args, Parser, Subcommand};

pub(crate) enum RunOutcome {
    Serve(taskdeck::config::AppConfig),
    Exit(i32),
}

pub(crate) fn run() -> RunOutcome {
    let cli = Cli::parse();
    if let Some(Command::Init(args)) = cli.command {
        let code = run_init(args);
        return RunOutcome::Exit(code);
    }

    let vapid = match resolve_vapid_config(&cli) {
        Ok(vapid) => vapid,
        Err(err) => {
            eprintln!("error: {err}");
            return RunOutcome::Exit(2);
        }
    };

    RunOutcome::Serve(taskdeck::config::AppConfig {
        app_name: cli.app_name,
        port: cli.port,
        seed_demo_tasks: cli.seed_demo_tasks,
        vapid,
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "taskdeck",
    version,
    about = "Small task board with web push reminders"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[arg(long, env = "TASKDECK_PORT", default_value_t = 5000)]
    port: u16,
    #[arg(long, default_value = "Taskdeck")]
    app_name: String,
    #[arg(long)]
    seed_demo_tasks: bool,
    #[arg(long, env = "TASKDECK_VAPID_PRIVATE_KEY")]
    vapid_private_key: Option<String>,
    #[arg(long, env = "TASKDECK_VAPID_PUBLIC_KEY")]
    vapid_public_key: Option<String>,
    #[arg(long, env = "TASKDECK_VAPID_SUBJECT")]
    vapid_subject: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    Init(InitArgs),
}

#[derive(Args, Debug)]
struct InitArgs {
    #[arg(long)]
    subject: Option<String>,
}

fn run_init(args: InitArgs) -> i32 {
    let credentials = match taskdeck::generate_vapid_credentials() {
        Ok(credentials) => credentials,
        Err(err) => {
            eprintln!("failed to generate VAPID credentials: {err}");
            return 1;
        }
    };
    let (subject, show_subject_note) = match args.subject {
        Some(subject) => (subject, false),
        None => ("mailto:you@example.com".to_string(), true),
    };

    println!("VAPID credentials generated.");
    println!();
    println!("TASKDECK_VAPID_PRIVATE_KEY=\"{}\"", credentials.private_key);
    println!("TASKDECK_VAPID_PUBLIC_KEY=\"{}\"", credentials.public_key);
    println!("TASKDECK_VAPID_SUBJECT=\"{subject}\"");
    if show_subject_note {
        println!();
        println!("Note: replace TASKDECK_VAPID_SUBJECT with a contact URI you control.");
    }
    println!();
    println!(
        "--vapid-private-key \"{}\" --vapid-public-key \"{}\" --vapid-subject \"{subject}\"",
        credentials.private_key, credentials.public_key
    );
    0
}

fn resolve_vapid_config(cli: &Cli) -> Result<taskdeck::config::VapidConfig, String> {
    let private_key = required_value(
        "--vapid-private-key",
        "TASKDECK_VAPID_PRIVATE_KEY",
        cli.vapid_private_key.as_deref(),
    )?;
    let public_key = required_value(
        "--vapid-public-key",
        "TASKDECK_VAPID_PUBLIC_KEY",
        cli.vapid_public_key.as_deref(),
    )?;
    let subject = required_value(
        "--vapid-subject",
        "TASKDECK_VAPID_SUBJECT",
        cli.vapid_subject.as_deref(),
    )?;

    Ok(taskdeck::config::VapidConfig {
        private_key,
        public_key,
        subject,
    })
}

fn required_value(flag: &str, env: &str, value: Option<&str>) -> Result<String, String> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(format!(
            "{flag} (or {env}) is required; run `taskdeck init` to generate credentials"
        )),
    }
}
