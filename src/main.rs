mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod scheduler;
mod store;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_agenda_dir, get_agenda_dir, init_local_agenda, load_or_default, schedule_file};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "A terminal-based personal schedule manager with reminders", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .agenda directory in the current directory
    Init,
    /// Print the tasks scheduled for a date
    List {
        /// Date to list (YYYY-MM-DD format). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .agenda directory
            let agenda_dir = init_local_agenda()?;
            println!("Initialized agenda directory: {}", agenda_dir.display());
            println!();
            println!("Agenda will now use this local directory for schedule storage.");
            println!("Run 'agenda' to open the calendar.");
            Ok(())
        }
        Some(Commands::List { date }) => {
            let list_date = if let Some(date_str) = date {
                chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                    .map_err(|e| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD: {}", e))?
            } else {
                chrono::Local::now().date_naive()
            };

            print_day(list_date)
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

/// Print one day's tasks to stdout, earliest first
fn print_day(date: chrono::NaiveDate) -> Result<()> {
    let store = load_or_default(schedule_file()?).into_store();
    let mut tasks = store.tasks_for_date(date);
    tasks.sort_by_key(|t| t.start_time);

    println!("Tasks for {}:", domain::format_date(date));
    if tasks.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for task in tasks {
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        let category = task
            .category
            .as_ref()
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();
        println!(
            "  {} {} – {}  {} {}{}",
            checkbox,
            domain::format_time(task.start_time),
            domain::format_time(task.end_time),
            task.title,
            task.priority.badge(),
            category
        );
    }
    Ok(())
}

fn run_tui() -> Result<()> {
    // Ensure agenda directory exists
    ensure_agenda_dir()?;

    // Show which directory we're using
    let agenda_dir = get_agenda_dir()?;
    eprintln!("Using agenda directory: {}", agenda_dir.display());

    // Load the persisted schedule
    let store = load_or_default(schedule_file()?).into_store();

    // Ask for notification permission up front
    let permission = notifications::request_permission();

    // Create app state
    let mut app = AppState::new(store, permission);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if app.needs_save() {
        if let Err(e) = app.save() {
            eprintln!("Error saving schedule: {}", e);
        }
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Fire due reminders
        app.poll_reminders();

        // Autosave if needed
        if app.needs_save() {
            app.save()?;
        }
    }
}
