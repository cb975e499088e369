//! Line-oriented terminal front-end
//!
//! Renders the current screen as text and maps typed commands onto
//! [`App`] operations. Notices and confirmations block on stdin.

use std::io::Write as _;

use app_ui::screens::{EventDetailsView, FieldView, LoginLink, RegisterScreen};
use app_ui::{App, Notice, PromptChoice, Prompter, Route, View};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

// =============================================================================
// Console
// =============================================================================

/// Stdin-backed prompter and line reader
pub struct Console {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl Console {
    /// Console over the process's stdin
    pub fn stdin() -> Self {
        Self { lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()) }
    }

    /// Print `prompt` and read one line; `None` at end of input
    pub async fn read_line(&self, prompt: &str) -> anyhow::Result<Option<String>> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        let line = self.lines.lock().await.next_line().await?;
        Ok(line.map(|l| l.trim_end_matches('\r').to_string()))
    }

    async fn read_or_empty(&self, prompt: &str) -> String {
        match self.read_line(prompt).await {
            Ok(Some(line)) => line,
            Ok(None) => String::new(),
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                String::new()
            }
        }
    }
}

#[async_trait]
impl Prompter for Console {
    async fn notify(&self, notice: &Notice) {
        println!();
        println!("  [{}] {}", notice.title, notice.message);
        self.read_or_empty("  (press Enter) ").await;
    }

    async fn confirm(&self, notice: &Notice) -> PromptChoice {
        println!();
        println!("  [{}] {}", notice.title, notice.message);
        let answer = self.read_or_empty("  OK / Cancel? ").await;
        parse_choice(&answer)
    }
}

fn parse_choice(answer: &str) -> PromptChoice {
    match answer.trim().to_ascii_lowercase().as_str() {
        "ok" | "o" | "y" | "yes" => PromptChoice::Ok,
        _ => PromptChoice::Cancel,
    }
}

// =============================================================================
// Commands
// =============================================================================

/// A typed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fill and submit the login form
    Login,
    /// Fill and submit the registration form, or register for the open event
    Register,
    /// Open an event by id
    Open(String),
    /// Navigate to a path
    Go(String),
    /// Go back one screen
    Back,
    /// Log out (asks for confirmation)
    Logout,
    /// Show the command list
    Help,
    /// Exit
    Quit,
    /// Anything else
    Unknown(String),
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let name = parts.next()?;
        let arg = parts.next().map(str::to_string);

        Some(match (name.to_ascii_lowercase().as_str(), arg) {
            ("login", _) => Command::Login,
            ("register", _) => Command::Register,
            ("open", Some(id)) => Command::Open(id),
            ("go", Some(path)) => Command::Go(path),
            ("back", _) => Command::Back,
            ("logout", _) => Command::Logout,
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit" | "q", _) => Command::Quit,
            _ => Command::Unknown(line.trim().to_string()),
        })
    }
}

const HELP: &str = "\
Commands:
  login            fill in and submit the login form
  register         create an account (or register for the open event)
  open <id>        show an event
  go <path>        navigate to /, /login, /register or /events/<id>
  back             previous screen
  logout           end the session
  quit             exit";

// =============================================================================
// Driver
// =============================================================================

/// Run the read-render loop until `quit` or end of input
pub async fn run(app: &mut App<Console>) -> anyhow::Result<()> {
    app.start().await?;

    loop {
        println!();
        println!("{}", render(&app.current_view()));

        let Some(line) = app.prompter().read_line("> ").await? else {
            break;
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        tracing::debug!("Command: {:?}", command);
        match command {
            Command::Login => login(app).await?,
            Command::Register => register(app).await?,
            Command::Open(id) => app.open_event(id.as_str()).await,
            Command::Go(path) => app.go(&path).await,
            Command::Back => {
                if !app.go_back().await {
                    println!("Nothing to go back to.");
                }
            }
            Command::Logout => {
                if !app.session().is_authenticated() {
                    println!("Not logged in.");
                } else {
                    app.request_logout().await;
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Unknown(input) => println!("Unknown command: {} (try `help`)", input),
        }
    }

    Ok(())
}

async fn login(app: &mut App<Console>) -> anyhow::Result<()> {
    if app.current_route() != &Route::Login {
        app.navigate(Route::Login).await;
        if app.current_route() != &Route::Login {
            println!("Already logged in.");
            return Ok(());
        }
    }

    let email = app.prompter().read_or_empty("Email: ").await;
    let password = app.prompter().read_or_empty("Password: ").await;

    if let Some(form) = app.login_form_mut() {
        form.email.set_value(email);
        form.password.set_value(password);
    }
    app.submit_login().await;
    Ok(())
}

async fn register(app: &mut App<Console>) -> anyhow::Result<()> {
    match app.current_route() {
        Route::EventDetails { .. } => {
            app.register_for_event().await;
            return Ok(());
        }
        Route::Login => app.navigate(LoginLink::CreateAccount.target()).await,
        Route::Register => {}
        _ => {
            println!("Log out first to create another account.");
            return Ok(());
        }
    }

    let username = app.prompter().read_or_empty("Username: ").await;
    let email = app.prompter().read_or_empty("Email: ").await;
    let password = app.prompter().read_or_empty("Password: ").await;
    let confirm = app.prompter().read_or_empty("Confirm Password: ").await;

    if let Some(form) = app.register_form_mut() {
        form.username.set_value(username);
        form.email.set_value(email);
        form.password.set_value(password);
        form.confirm_password.set_value(confirm);
    }
    app.submit_register().await;
    Ok(())
}

// =============================================================================
// Rendering
// =============================================================================

fn render_field(field: &FieldView) -> String {
    let value = if field.value.is_empty() { field.placeholder } else { field.value.as_str() };
    format!("  {}: {}", field.label, value)
}

/// Render a view as plain text
pub fn render(view: &View) -> String {
    let mut out = Vec::new();

    match view {
        View::Login(login) => {
            out.push(format!("== {} ==", login.app_title));
            out.push(login.title.to_string());
            out.push(render_field(&login.email));
            out.push(render_field(&login.password));
            out.push(if login.loading { "  ...".to_string() } else { format!("  [{}]", login.submit_label) });
            out.extend(login.links.iter().map(|link| format!("  {}", link)));
        }
        View::Register(form) => {
            out.push(format!("== {} ==", form.app_title));
            out.push(form.title.to_string());
            out.extend(form.fields.iter().map(render_field));
            out.push(if form.loading { "  ...".to_string() } else { format!("  [{}]", form.submit_label) });
            out.push(format!("  {}", RegisterScreen::LOGIN_LINK));
        }
        View::Home(home) => {
            out.push(home.header.to_string());
            if home.loading {
                out.push("  Loading...".to_string());
            }
            for card in &home.cards {
                out.push(format!("  #{} {}", card.key, card.title));
                out.push(format!("      {} | {}", card.date, card.location));
            }
        }
        View::EventDetails(EventDetailsView::Loading) => out.push("Loading...".to_string()),
        View::EventDetails(EventDetailsView::Unavailable { message }) => {
            out.push(message.to_string())
        }
        View::EventDetails(EventDetailsView::Loaded(body)) => {
            out.push(format!("== {} ==", body.title));
            out.push(format!("  {}", body.date));
            out.push(format!("  {}", body.location));
            out.push(format!("  image: {}", body.image_url));
            out.push(format!("  [{}]", body.register_label));
            for section in &body.sections {
                out.push(String::new());
                out.push(section.title.to_string());
                out.push("  ----".to_string());
                out.extend(section.paragraphs.iter().map(|p| format!("  {}", p)));
            }
        }
        View::NotFound { message } => out.push(message.to_string()),
    }

    out.join("\n")
}
