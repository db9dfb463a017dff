//! The interactive session shell.
//!
//! A console rendition of the dashboard loop: log in, read a role summary,
//! type actions in plain language, watch the state replace itself. The
//! shell never touches state directly; everything goes through the store's
//! dispatch, so its failure behavior is exactly the one the dashboards get.

use std::sync::Arc;

use dialoguer::{Confirm, Input, Password};
use validator::Validate;

use iperform_gateway::StateSynthesizer;
use iperform_store::{
    ChangePasswordRequest, LoginOutcome, RegisterSchoolRequest, Session, SyncStore,
};

use super::summary::role_summary;

pub async fn run(register_school: Option<String>) -> anyhow::Result<()> {
    let client = super::build_gateway()?;
    let store = SyncStore::new(client.clone() as Arc<dyn StateSynthesizer>);
    let mut session = Session::new();

    match register_school {
        Some(name) => register(&store, &mut session, name).await?,
        None => load_demo_data(&store).await?,
    }

    'session: loop {
        // Login gate: loop until a user is authenticated (registration may
        // have authenticated the principal already).
        while session.current().is_none() {
            if !login(&store, &mut session).await? {
                break 'session;
            }
        }

        println!();
        if let (Some(user), Some(state)) = (session.current(), store.state()) {
            println!("{}", role_summary(user, &state));
        }
        println!("Type an action in plain language, or one of:");
        println!("  summary | timetable <constraints> | lab <item, item, ...> | logout | quit");

        // Action loop for the authenticated user.
        loop {
            let line: String = Input::new().with_prompt(">").interact_text()?;
            let line = line.trim().to_string();

            match line.as_str() {
                "" => continue,
                "quit" | "exit" => break 'session,
                "logout" => {
                    session.logout();
                    println!("Logged out.");
                    continue 'session;
                }
                "summary" => {
                    if let (Some(user), Some(state)) = (session.current(), store.state()) {
                        println!("{}", role_summary(user, &state));
                    }
                    continue;
                }
                _ => {}
            }

            if let Some(constraints) = line.strip_prefix("timetable ") {
                match client.generate_timetable(constraints).await {
                    Ok(text) => println!("{}", text),
                    Err(err) => eprintln!("❌ {}", err),
                }
                continue;
            }

            if let Some(items) = line.strip_prefix("lab ") {
                let items: Vec<String> =
                    items.split(',').map(|s| s.trim().to_string()).collect();
                match client.simulate_experiment(&items).await {
                    Ok(report) => {
                        println!("[{}] {}", report.status, report.observation);
                        println!("Safety: {}", report.safety_assessment);
                        for step in &report.next_steps {
                            println!("  next: {}", step);
                        }
                    }
                    Err(err) => eprintln!("❌ {}", err),
                }
                continue;
            }

            println!("Updating...");
            match store.dispatch(&line).await {
                Ok(state) => {
                    println!(
                        "✅ Done. ({} users, {} students, {} messages)",
                        state.users.len(),
                        state.students.len(),
                        state.messages.len()
                    );
                }
                Err(err) => {
                    // Previous state is still on screen; the action was not
                    // applied.
                    eprintln!("❌ {}", err);
                }
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}

/// Initial load for a plain (non-registration) session, with a retry loop
/// mirroring the "Initialization Failed" screen.
async fn load_demo_data(store: &SyncStore) -> anyhow::Result<()> {
    loop {
        println!("Initializing school data...");
        match store.initialize(None).await {
            Ok(state) => {
                println!(
                    "🏫 {} ready ({} users)",
                    state.school_profile.name,
                    state.users.len()
                );
                return Ok(());
            }
            Err(err) => {
                eprintln!("❌ {}", err);
                if !Confirm::new()
                    .with_prompt("Retry initialization?")
                    .default(true)
                    .interact()?
                {
                    anyhow::bail!("initialization abandoned");
                }
            }
        }
    }
}

/// New-school registration: collect administrator details, materialize a
/// fresh dataset, and log the generated principal in.
async fn register(
    store: &SyncStore,
    session: &mut Session,
    school_name: String,
) -> anyhow::Result<()> {
    let request = loop {
        let admin_name: String = Input::new()
            .with_prompt("Administrator name")
            .interact_text()?;
        let admin_email: String = Input::new()
            .with_prompt("Administrator email")
            .interact_text()?;
        let admin_password = Password::new()
            .with_prompt("Administrator password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?;

        let request = RegisterSchoolRequest {
            school_name: school_name.clone(),
            admin_name,
            admin_email,
            admin_password,
        };
        match request.validate() {
            Ok(()) => break request,
            Err(err) => eprintln!("❌ {}", err),
        }
    };

    println!("Registering \"{}\"...", request.school_name);
    let seed = request.into_seed();
    let state = store.initialize(Some(&seed)).await?;

    match session.adopt_principal(&state) {
        Some(principal) => {
            println!("✅ School registered. Logged in as {}.", principal.name)
        }
        None => println!("⚠️  School registered, but no principal account was generated."),
    }
    Ok(())
}

/// One pass through the login prompt. Returns `false` when the user asked
/// to quit instead of logging in.
async fn login(store: &SyncStore, session: &mut Session) -> anyhow::Result<bool> {
    let username: String = Input::new()
        .with_prompt("Username (or 'quit')")
        .interact_text()?;
    if username.trim().eq_ignore_ascii_case("quit") {
        return Ok(false);
    }
    let password = Password::new().with_prompt("Password").interact()?;

    let state = store.state();
    match session.login(state.as_deref(), &username, &password) {
        Ok(LoginOutcome::LoggedIn(user)) => {
            println!("Welcome, {} ({}).", user.name, user.role);
        }
        Ok(LoginOutcome::PasswordChangeRequired(_)) => {
            change_password(store, session).await?;
        }
        Err(err) => eprintln!("❌ {}", err),
    }
    Ok(true)
}

/// The mandatory password-change gate. The user stays pending until the
/// clearing mutation succeeds; cancelling logs them out entirely.
async fn change_password(store: &SyncStore, session: &mut Session) -> anyhow::Result<()> {
    println!("You must change your password before you can proceed.");
    loop {
        let new_password = Password::new().with_prompt("New password").interact()?;
        let confirm_password = Password::new()
            .with_prompt("Confirm new password")
            .interact()?;

        let request = ChangePasswordRequest {
            new_password,
            confirm_password,
        };
        match session.complete_password_change(store, &request).await {
            Ok(user) => {
                println!("✅ Password updated. Welcome, {}.", user.name);
                return Ok(());
            }
            Err(err) => {
                eprintln!("❌ {}", err);
                if !Confirm::new()
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()?
                {
                    session.logout();
                    return Ok(());
                }
            }
        }
    }
}
