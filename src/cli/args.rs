// src/cli/args.rs

use etantara::{
    error::AppError,
    models::{content::LibraryFilter, user::ProfileChanges},
};

pub const USAGE: &str = "\
Usage: etantara <command> [args]

Account:
  login <username> <password>
  register <full name> <email> <password>
  logout
  whoami
  profile
  update-profile [--bio <text>] [--region <region>] [--language <lang>]

Library:
  library [--type <type>] [--search <text>] [--region <region>]
  show <id>
  categories
  proverb
  calendar

Quiz and points:
  quiz                      interactive quiz (`stop` ends early, `quit` leaves)
  daily                     answer the question of the day
  points
  submissions

Sharing (requires enough points):
  share-quiz <question> <correct answer> <option A> <option B> [option C] [option D]
  share-tantara <title> <content>
  share-ohabolana <expression> <meaning>
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login { username: String, password: String },
    Register { full_name: String, email: String, password: String },
    Logout,
    WhoAmI,
    Profile,
    UpdateProfile(ProfileChanges),
    Library { kind: Option<String>, search: Option<String>, region: Option<String> },
    Show { id: i64 },
    Categories,
    Proverb,
    Calendar,
    Quiz,
    Daily,
    Points,
    Submissions,
    ShareQuiz { question: String, correct_answer: String, options: Vec<String> },
    ShareTantara { title: String, content: String },
    ShareOhabolana { expression: String, meaning: String },
    Help,
}

impl Command {
    pub fn library_filter(&self) -> LibraryFilter {
        match self {
            Command::Library { search, region, .. } => LibraryFilter {
                search: search.clone(),
                // The type is filtered server-side already.
                kind: None,
                region: region.clone(),
            },
            _ => LibraryFilter::default(),
        }
    }
}

fn usage_error(msg: &str) -> AppError {
    AppError::Validation(format!("{}\n\n{}", msg, USAGE))
}

fn exactly<const N: usize>(name: &str, rest: &[String]) -> Result<[String; N], AppError> {
    <[String; N]>::try_from(rest.to_vec())
        .map_err(|_| usage_error(&format!("'{}' expects {} argument(s)", name, N)))
}

pub fn parse(args: &[String]) -> Result<Command, AppError> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    let command = match name.as_str() {
        "login" => {
            let [username, password] = exactly("login", rest)?;
            Command::Login { username, password }
        }
        "register" => {
            let [full_name, email, password] = exactly("register", rest)?;
            Command::Register { full_name, email, password }
        }
        "logout" => Command::Logout,
        "whoami" => Command::WhoAmI,
        "profile" => Command::Profile,
        "update-profile" => parse_update_profile(rest)?,
        "library" => parse_library(rest)?,
        "show" => {
            let [id] = exactly("show", rest)?;
            let id = id
                .parse()
                .map_err(|_| usage_error(&format!("'{}' is not a content id", id)))?;
            Command::Show { id }
        }
        "categories" => Command::Categories,
        "proverb" => Command::Proverb,
        "calendar" => Command::Calendar,
        "quiz" => Command::Quiz,
        "daily" => Command::Daily,
        "points" => Command::Points,
        "submissions" => Command::Submissions,
        "share-quiz" => {
            if !(4..=6).contains(&rest.len()) {
                return Err(usage_error("'share-quiz' expects a question, the answer and 2 to 4 options"));
            }
            Command::ShareQuiz {
                question: rest[0].clone(),
                correct_answer: rest[1].clone(),
                options: rest[2..].to_vec(),
            }
        }
        "share-tantara" => {
            let [title, content] = exactly("share-tantara", rest)?;
            Command::ShareTantara { title, content }
        }
        "share-ohabolana" => {
            let [expression, meaning] = exactly("share-ohabolana", rest)?;
            Command::ShareOhabolana { expression, meaning }
        }
        "help" | "--help" | "-h" => Command::Help,
        other => return Err(usage_error(&format!("unknown command '{}'", other))),
    };

    Ok(command)
}

fn parse_library(rest: &[String]) -> Result<Command, AppError> {
    let mut kind = None;
    let mut search = None;
    let mut region = None;

    let mut iter = rest.iter();
    while let Some(flag) = iter.next() {
        let slot = match flag.as_str() {
            "--type" => &mut kind,
            "--search" => &mut search,
            "--region" => &mut region,
            other => return Err(usage_error(&format!("unknown library option '{}'", other))),
        };
        let value = iter
            .next()
            .ok_or_else(|| usage_error(&format!("'{}' needs a value", flag)))?;
        *slot = Some(value.clone());
    }

    Ok(Command::Library { kind, search, region })
}

fn parse_update_profile(rest: &[String]) -> Result<Command, AppError> {
    let mut changes = ProfileChanges::default();

    let mut iter = rest.iter();
    while let Some(flag) = iter.next() {
        let slot = match flag.as_str() {
            "--bio" => &mut changes.bio,
            "--region" => &mut changes.region,
            "--language" => &mut changes.language,
            other => return Err(usage_error(&format!("unknown profile option '{}'", other))),
        };
        let value = iter
            .next()
            .ok_or_else(|| usage_error(&format!("'{}' needs a value", flag)))?;
        *slot = Some(value.clone());
    }

    if changes.is_empty() {
        return Err(usage_error("'update-profile' needs at least one field to change"));
    }
    Ok(Command::UpdateProfile(changes))
}
