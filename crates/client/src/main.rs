use std::io::{self, BufRead, Write};

use engine::Summary;

use client::Client;
use error::{AppError, Result};
use settings::{AppConfig, Command, LoginArgs};

mod client;
mod error;
mod input;
mod report;
mod settings;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let invocation = settings::load()?;
    if invocation.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pocket_ledger_client=debug")
            .with_writer(io::stderr)
            .init();
    }

    let settings = invocation.config;
    let client = Client::new(&settings.base_url)?;
    tracing::debug!(base_url = %settings.base_url, "client ready");

    match invocation.command {
        Command::Register(login) => {
            let password = password(&login)?;
            let session = client.register(&login.username, &password).await?;
            println!("{} (user id {})", session.message, session.user_id);
        }
        Command::Login(login) => {
            let password = password(&login)?;
            let session = client.login(&login.username, &password).await?;
            println!("{} (user id {})", session.message, session.user_id);
        }
        Command::Add {
            category,
            amount,
            date,
            description,
        } => {
            let user_id = user_id(&settings)?;
            let payload =
                input::new_expense(user_id, &category, &amount, date.as_deref(), description)?;
            let created = client.add_expense(&payload).await?;
            println!("{} (id {})", created.message, created.id);
        }
        Command::List => {
            let expenses = client.expenses(user_id(&settings)?).await?;
            print!("{}", report::expense_table(&expenses, &settings.currency));
        }
        Command::Update {
            expense_id,
            date,
            category,
            amount,
            description,
            clear_description,
        } => {
            let payload = input::update(
                date.as_deref(),
                category.as_deref(),
                amount.as_deref(),
                description,
                clear_description,
            )?;
            let ack = client.update_expense(expense_id, &payload).await?;
            println!("{}", ack.message);
        }
        Command::Delete { expense_id } => {
            let ack = client.delete_expense(expense_id).await?;
            println!("{}", ack.message);
        }
        Command::Summary => {
            let summary = fetch_summary(&client, &settings).await?;
            print!("{}", report::summary_table(&summary, &settings.currency));
        }
        Command::Export { output } => {
            let summary = fetch_summary(&client, &settings).await?;
            let file = std::fs::File::create(&output)?;
            report::write_summary_csv(&summary, file)?;
            println!("Summary exported to {output}");
        }
    }

    Ok(())
}

fn user_id(settings: &AppConfig) -> Result<i32> {
    settings
        .user_id
        .ok_or_else(|| AppError::Input("Please login first (pass --user-id)".to_string()))
}

async fn fetch_summary(client: &Client, settings: &AppConfig) -> Result<Summary> {
    let chart = client.chart_data(user_id(settings)?).await?;
    Ok(Summary::from_parts(chart.categories, chart.amounts)?)
}

fn password(login: &LoginArgs) -> Result<String> {
    if let Some(password) = &login.password {
        return Ok(password.clone());
    }

    print!("Password: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(AppError::Input(
            "Please enter username and password".to_string(),
        ));
    }
    Ok(password)
}
