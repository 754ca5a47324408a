//! Interactive enrollment flow
//!
//! Collects the administrator's credentials, logs in, gathers the new user's
//! fields, creates the user, and always logs out afterwards.

use std::io::{self, Write};

use common::{
    models::{LoginCredentials, NewUser, UserRole},
    validation::parse_major_id,
};
use reqwest::ClientBuilder;
use serde_json::Value;

use crate::{
    config::{ClientConfig, DEFAULT_BASE_URL},
    error::{EnrollError, EnrollResult},
    prompt::Prompter,
    session::AdminSession,
};

/// Run one enrollment, writing the transcript to `out`
///
/// API and input errors are printed and count as a finished run. Only
/// terminal failures are returned, after the logout attempt. `client` is
/// the HTTP client configuration the session is built from.
pub async fn run<P, W>(
    prompter: &mut P,
    out: &mut W,
    client: ClientBuilder,
) -> EnrollResult<()>
where
    P: Prompter,
    W: Write,
{
    let (config, credentials) = read_login(prompter)?;

    let session = match AdminSession::new(config, client) {
        Ok(session) => session,
        Err(err) => return report(Err(err.into()), out),
    };

    let outcome = enroll(&session, &credentials, prompter, out).await;
    let outcome = report(outcome, out);

    // Best effort: a failed logout is never reported.
    if session.logout().await.is_ok() {
        let _ = writeln!(out, "Logged out.");
    }

    outcome
}

/// Ask where the API lives and who the administrator is
fn read_login<P: Prompter>(prompter: &mut P) -> io::Result<(ClientConfig, LoginCredentials)> {
    let base_url = prompter.input(&format!("API Base URL [{DEFAULT_BASE_URL}]"))?;
    let credentials = LoginCredentials {
        username: prompter.input("SysAdmin Username")?.trim().to_string(),
        password: prompter.password("SysAdmin Password")?,
    };

    Ok((ClientConfig::from_input(&base_url), credentials))
}

async fn enroll<P, W>(
    session: &AdminSession,
    credentials: &LoginCredentials,
    prompter: &mut P,
    out: &mut W,
) -> EnrollResult<Value>
where
    P: Prompter,
    W: Write,
{
    session.login(credentials).await?;
    writeln!(out, "Login successful.")?;

    let username = prompter.input("New Username")?.trim().to_string();
    let password = prompter.password("New Password")?;
    let role = prompter
        .input(&format!("Role ({})", UserRole::choices()))?
        .trim()
        .to_string();

    let mut user = NewUser::new(username, password, role);
    if user.wants_name() {
        user.name = Some(prompter.input("Real Name")?.trim().to_string());
    }
    if user.wants_major_id() {
        user.major_id = parse_major_id(&prompter.input("Major ID")?)?;
    }

    Ok(session.create_user(&user).await?)
}

fn report<W: Write>(outcome: EnrollResult<Value>, out: &mut W) -> EnrollResult<()> {
    match outcome {
        Ok(created) => {
            writeln!(out)?;
            writeln!(out, "User Created Successfully:")?;
            writeln!(out, "{created:#}")?;
        }
        Err(EnrollError::Api(err)) => {
            writeln!(out, "API Error: {err}")?;
            if let Some(details) = err.details() {
                writeln!(out, "Details: {details}")?;
            }
        }
        Err(EnrollError::Input(err)) => writeln!(out, "Input Error: {err}")?,
        Err(err) => return Err(err),
    }

    Ok(())
}
