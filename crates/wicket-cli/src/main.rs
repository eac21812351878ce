// File: src/main.rs
// Purpose: Command-line demo driving the credential form against an in-memory authenticator

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use wicket_forms::{
    Credentials, Field, FormController, FormMode, RouteTable, StaticAuthenticator, SubmitOutcome,
};
use wicket_schema::signup_schema;

#[derive(Parser)]
#[command(name = "wicket", about = "Credential form walkthrough")]
struct Cli {
    /// Route configuration file (TOML), defaults to wicket.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Accepted account for the in-memory authenticator (repeatable)
    #[arg(long = "user", value_name = "EMAIL=PASSWORD", global = true)]
    users: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the form in login mode
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Submit the form in registration mode
    Register {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        /// Confirmation of the password
        #[arg(long, default_value = "")]
        confirm: String,
    },
    /// Run signup data through the declarative schema without submitting
    Check {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let routes = match &cli.config {
        Some(path) => RouteTable::load(path),
        None => RouteTable::load_default(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}, using defaults", e);
        RouteTable::default()
    });

    let authenticator = build_authenticator(&cli.users);
    let controller = FormController::with_routes(Arc::new(authenticator), routes);

    let ok = match cli.command {
        Commands::Login { email, password } => run_login(&controller, &email, &password).await,
        Commands::Register {
            name,
            email,
            password,
            confirm,
        } => run_register(&controller, &name, &email, &password, &confirm).await,
        Commands::Check {
            name,
            email,
            password,
            confirm,
        } => run_check(&name, &email, &password, &confirm),
    };

    if !ok {
        process::exit(1);
    }
}

fn build_authenticator(entries: &[String]) -> StaticAuthenticator {
    if entries.is_empty() {
        println!("No --user given, accepting user@example.com / secret123");
        return StaticAuthenticator::new().with_user("user@example.com", "secret123");
    }

    let mut auth = StaticAuthenticator::new();
    for entry in entries {
        match entry.split_once('=') {
            Some((email, password)) => {
                auth = auth.with_user(email, password);
            }
            None => {
                eprintln!("Ignoring malformed --user {:?}, expected EMAIL=PASSWORD", entry);
            }
        }
    }
    auth
}

async fn run_login(controller: &FormController, email: &str, password: &str) -> bool {
    controller.set_field(Field::Email, email).await;
    controller.set_field(Field::Password, password).await;
    report(controller, controller.submit().await).await
}

async fn run_register(
    controller: &FormController,
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> bool {
    controller.set_mode(FormMode::Register).await;
    controller.set_field(Field::Name, name).await;
    controller.set_field(Field::Email, email).await;
    controller.set_field(Field::Password, password).await;
    controller.set_field(Field::ConfirmPassword, confirm).await;
    report(controller, controller.submit().await).await
}

async fn report(controller: &FormController, outcome: SubmitOutcome) -> bool {
    match outcome {
        SubmitOutcome::Redirect(route) => {
            println!("Login confirmed, navigate to {}", route);
            true
        }
        SubmitOutcome::Denied(message) => {
            println!("Authentication error: {}", message);
            if controller.mode().await == FormMode::Login {
                println!("No account? Registration lives at {}", controller.signup_route());
            }
            false
        }
        SubmitOutcome::Invalid(errors) => {
            println!("The form did not validate:");
            for field in Field::ALL {
                if let Some(message) = errors.get_error(field.as_str()) {
                    println!("  {}: {}", field, message);
                }
            }
            false
        }
        SubmitOutcome::InFlight => {
            println!("A submission is already running");
            false
        }
    }
}

fn run_check(name: &str, email: &str, password: &str, confirm: &str) -> bool {
    let mut credentials = Credentials::new();
    credentials.set(Field::Name, name);
    credentials.set(Field::Email, email);
    credentials.set(Field::Password, password);
    credentials.set(Field::ConfirmPassword, confirm);

    match signup_schema().validate(&credentials) {
        Ok(()) => {
            println!("Signup data satisfies the schema");
            true
        }
        Err(errors) => {
            println!("The signup schema rejected:");
            for field in Field::ALL {
                if let Some(message) = errors.get_error(field.as_str()) {
                    println!("  {}: {}", field, message);
                }
            }
            false
        }
    }
}
