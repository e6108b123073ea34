// src/cli/commands.rs

use tokio::io::{AsyncBufReadExt, BufReader};

use etantara::{
    error::AppError,
    models::{
        content::Content,
        contribution::{ShareOhabolanaRequest, ShareQuizRequest, ShareTantaraRequest},
        question::AnswerMode,
        user::{Profile, RegisterRequest},
    },
    state::AppState,
    utils::html::plain_text,
};

use crate::cli::{
    args::{Command, USAGE},
    quiz,
};

pub async fn dispatch(state: &mut AppState, command: Command) -> Result<(), AppError> {
    match command {
        Command::Help => {
            print!("{}", USAGE);
            Ok(())
        }
        Command::Login { username, password } => {
            let identity = state.client.login(&username, &password).await?;
            state.set_identity(identity)?;
            println!("Welcome to eTantara, {}!", state.identity.label());
            Ok(())
        }
        Command::Register { full_name, email, password } => {
            let request = RegisterRequest::from_signup(&full_name, &email, &password);
            state.client.register(&request).await?;
            println!("Account created for {}. You can now log in.", request.username);
            Ok(())
        }
        Command::Logout => {
            if state.identity.is_logged_in() {
                if let Err(e) = state.client.logout().await {
                    tracing::warn!("Logout request failed: {}", e);
                }
            }
            state.clear_identity()?;
            println!("Logged out.");
            Ok(())
        }
        Command::WhoAmI => {
            match state.identity.username.as_deref() {
                Some(username) => {
                    println!("{}", username);
                    if let Some(saved_at) = state.identity.saved_at {
                        println!("logged in since {}", saved_at.format("%Y-%m-%d %H:%M UTC"));
                    }
                }
                None => println!("{} (not logged in)", state.identity.label()),
            }
            Ok(())
        }
        Command::Profile => {
            let profile = state.client.profile().await?;
            print_profile(&profile);
            Ok(())
        }
        Command::UpdateProfile(changes) => {
            state.identity.require_username()?;
            let mut profile = state.client.profile().await?;
            profile.apply(&changes);
            state.client.update_profile(&profile).await?;
            println!("Profile updated.");
            print_profile(&profile);
            Ok(())
        }
        Command::Library { ref kind, .. } => {
            let filter = command.library_filter();
            let contents = state.client.list_contents(kind.as_deref()).await?;
            let found = filter.apply(&contents);
            if found.is_empty() {
                println!("No content matches.");
            }
            for item in found {
                print_content_line(item);
            }
            Ok(())
        }
        Command::Show { id } => {
            let item = state.client.get_content(id).await?;
            print_content_detail(&item);
            Ok(())
        }
        Command::Categories => {
            for category in state.client.list_categories().await? {
                println!("{}", category);
            }
            Ok(())
        }
        Command::Proverb => {
            match state.client.daily_proverb().await? {
                Some(proverb) => print_content_detail(&proverb),
                None => println!("No proverb today."),
            }
            Ok(())
        }
        Command::Calendar => {
            for month in state.client.calendar().await? {
                println!("{}", month.month);
                for event in &month.events {
                    println!("  - {}", event);
                }
            }
            Ok(())
        }
        Command::Quiz => quiz::run(state).await,
        Command::Daily => daily(state).await,
        Command::Points => {
            let username = state.identity.require_username()?;
            let points = state.client.points(username).await?;
            let threshold = state.config.share_points_threshold;
            println!("{} points", points);
            if points < threshold {
                println!("{} more to unlock sharing.", threshold - points);
            } else {
                println!("Sharing is unlocked.");
            }
            Ok(())
        }
        Command::Submissions => {
            let username = state.identity.require_username()?;
            let submissions = state.client.submissions(username).await?;
            if submissions.is_empty() {
                println!("No submissions yet.");
            }
            for s in submissions {
                let status = match s.statut.as_str() {
                    "en_attente" => "pending",
                    "approuve" => "approved",
                    "rejete" => "rejected",
                    other => other,
                };
                println!("#{} {} [{}]", s.id, s.titre, status);
                if let Some(reason) = s.raison_rejet.as_deref() {
                    println!("    reason: {}", reason);
                }
            }
            Ok(())
        }
        Command::ShareQuiz { question, correct_answer, options } => {
            let mut options = options.into_iter();
            let request = ShareQuizRequest {
                question,
                correct_answer,
                option_a: options.next().unwrap_or_default(),
                option_b: options.next().unwrap_or_default(),
                option_c: options.next().unwrap_or_default(),
                option_d: options.next().unwrap_or_default(),
                ..Default::default()
            };
            state.share_service().share_quiz(request).await?;
            println!("Your quiz question was shared. Misaotra!");
            Ok(())
        }
        Command::ShareTantara { title, content } => {
            let request = ShareTantaraRequest { title, content, ..Default::default() };
            state.share_service().share_tantara(request).await?;
            println!("Your story was shared. Misaotra!");
            Ok(())
        }
        Command::ShareOhabolana { expression, meaning } => {
            let request = ShareOhabolanaRequest { expression, meaning, ..Default::default() };
            state.share_service().share_ohabolana(request).await?;
            println!("Your ohabolana was shared. Misaotra!");
            Ok(())
        }
    }
}

async fn daily(state: &AppState) -> Result<(), AppError> {
    let Some(question) = state.client.fetch_daily_question().await? else {
        println!("No quiz today.");
        return Ok(());
    };

    println!("{}", question.prompt);
    if let Some(passage) = question.passage.as_deref().filter(|p| *p != question.prompt) {
        println!("  {}", passage);
    }
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let Some(line) = lines.next_line().await? else {
        return Ok(());
    };

    let answer = match question.mode() {
        AnswerMode::Choice => crate::cli::quiz::resolve_selection(&question, &line)?,
        AnswerMode::FreeText => line,
    };
    if answer.trim().is_empty() {
        return Err(AppError::Validation("an answer is required".to_string()));
    }

    let result = state.client.check_daily_answer(question.id, &answer).await?;
    if result.already_participated {
        println!("You already played today's quiz.");
    } else if result.correct {
        println!("Correct! Bravo!");
    } else {
        println!("Wrong answer.");
    }
    if let Some(expected) = result.correct_answer.as_deref() {
        println!("Answer: {}", expected);
    }
    if let Some(message) = result.message.as_deref() {
        println!("{}", message);
    }
    Ok(())
}

fn print_profile(profile: &Profile) {
    println!("{}", profile.display_name());
    let fields = [
        ("Username", profile.username.as_deref()),
        ("Email", profile.email.as_deref()),
        ("Region", profile.region.as_deref()),
        ("Language", profile.langue_preferee.as_deref()),
        ("Bio", profile.bio.as_deref()),
    ];
    for (label, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            println!("{}: {}", label, value);
        }
    }
    if let Some(points) = profile.points {
        println!("Points: {}", points);
    }
}

fn print_content_line(item: &Content) {
    let category = item.category().unwrap_or("-");
    match item.region.as_deref() {
        Some(region) => println!("#{:<4} {} [{}] ({})", item.id, item.titre, category, region),
        None => println!("#{:<4} {} [{}]", item.id, item.titre, category),
    }
}

fn print_content_detail(item: &Content) {
    println!("{}", item.titre);
    if let Some(category) = item.category() {
        println!("Type: {}", category);
    }
    if let Some(author) = item.auteur.as_deref() {
        println!("Author: {}", author);
    }
    if let Some(region) = item.region.as_deref() {
        println!("Region: {}", region);
    }
    if let Some(description) = item.description.as_deref() {
        println!();
        println!("{}", plain_text(description));
    }
}
