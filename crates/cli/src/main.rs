use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use log::debug;
use strum::IntoEnumIterator;

use liftlog_domain::{
    MuscleGroup, SessionManager, Step, catalog, format, validate_set_inputs,
};

#[derive(Parser, Debug)]
#[command(version, about = "liftlog - workout tracker CLI", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the exercise catalog
    Exercises {
        /// Only show exercises for one muscle group
        #[arg(short, long)]
        muscle_group: Option<String>,
    },
    /// Log a workout interactively
    Workout,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Commands::Exercises { muscle_group } => list_exercises(muscle_group.as_deref()),
        Commands::Workout => {
            let stdin = io::stdin();
            let mut session = Session {
                manager: SessionManager::new(),
                input: stdin.lock(),
            };
            session.run()
        }
    }
}

fn list_exercises(muscle_group: Option<&str>) -> Result<()> {
    let exercises = match muscle_group {
        Some(raw) => {
            let muscle_group = raw
                .parse::<MuscleGroup>()
                .map_err(|_| anyhow!("unknown muscle group: {raw}"))?;
            catalog::exercises_by_muscle_group(muscle_group)
        }
        None => catalog::EXERCISE_DATABASE.iter().collect(),
    };

    for exercise in exercises {
        println!(
            "{:12} {} {} ({})",
            exercise.id,
            exercise.icon,
            exercise.name,
            exercise.muscle_group.label()
        );
    }

    Ok(())
}

struct Session<R: BufRead> {
    manager: SessionManager,
    input: R,
}

impl<R: BufRead> Session<R> {
    /// Drives the session state machine from line input until the
    /// user quits or input ends.
    fn run(&mut self) -> Result<()> {
        loop {
            let finished = match self.manager.step() {
                Step::Ready => self.ready()?,
                Step::SelectTypes => self.select_types()?,
                Step::SelectExercise => self.select_exercise()?,
                Step::LogSets => self.log_sets()?,
                Step::Progress => self.progress()?,
            };
            if finished {
                return Ok(());
            }
        }
    }

    fn ready(&mut self) -> Result<bool> {
        if !self.manager.history().is_empty() {
            println!("{} workout(s) in history", self.manager.history().len());
        }
        let Some(line) = self.prompt("Press Enter to start a workout, or 'q' to quit")? else {
            return Ok(true);
        };
        if line == "q" {
            return Ok(true);
        }
        self.manager.begin_selection();
        Ok(false)
    }

    fn select_types(&mut self) -> Result<bool> {
        println!("Muscle groups:");
        for muscle_group in MuscleGroup::iter() {
            let marker = if self.manager.selected_muscle_groups().contains(&muscle_group) {
                "[x]"
            } else {
                "[ ]"
            };
            println!("  {marker} {muscle_group}");
        }

        let Some(line) = self.prompt("Toggle a group by name, 'done' to start, 'q' to quit")?
        else {
            return Ok(true);
        };

        match line.as_str() {
            "q" => return Ok(true),
            "done" => {
                if let Err(error) = self.manager.confirm_selection() {
                    println!("{error}");
                }
            }
            raw => match raw.parse::<MuscleGroup>() {
                Ok(muscle_group) => self.manager.toggle_muscle_group(muscle_group),
                Err(_) => println!("unknown muscle group: {raw}"),
            },
        }

        Ok(false)
    }

    fn select_exercise(&mut self) -> Result<bool> {
        println!("Exercises:");
        for exercise in self.manager.exercises_for_selection() {
            println!("  {:12} {} {}", exercise.id, exercise.icon, exercise.name);
        }

        let Some(line) =
            self.prompt("Pick an exercise by id, 'finish' to complete the workout, 'cancel' to discard")?
        else {
            return Ok(true);
        };

        match line.as_str() {
            "cancel" => self.manager.cancel_workout(),
            "finish" => {
                if let Err(error) = self.manager.complete_workout() {
                    println!("{error}");
                }
            }
            exercise_id => {
                self.manager.add_exercise(exercise_id);
                if self.manager.step() != Step::LogSets {
                    println!("unknown exercise id: {exercise_id}");
                }
            }
        }

        Ok(false)
    }

    fn log_sets(&mut self) -> Result<bool> {
        let Some(log) = self.manager.current_exercise_log() else {
            // Stale pointer; fall back to the exercise list.
            self.manager.add_another_exercise();
            return Ok(false);
        };
        let log_id = log.id;

        println!("{} - set {}", log.exercise_name, log.set_count() + 1);
        for (index, set) in log.sets.iter().enumerate() {
            println!(
                "  {}",
                format::set_display(Some(index), set.weight, set.reps.into())
            );
        }

        let Some(line) = self.prompt("Enter '<weight> <reps>', or 'done' to complete the exercise")?
        else {
            return Ok(true);
        };

        if line == "done" {
            if let Err(error) = self.manager.complete_exercise(log_id) {
                println!("{error}");
            }
            return Ok(false);
        }

        let mut parts = line.split_whitespace();
        let weight = parts.next().unwrap_or_default();
        let reps = parts.next().unwrap_or_default();
        match validate_set_inputs(weight, reps) {
            Ok((weight, reps)) => {
                debug!("logging set {weight} lbs x {reps}");
                self.manager.add_set(log_id, weight, reps);
            }
            Err(error) => println!("{error}"),
        }

        Ok(false)
    }

    fn progress(&mut self) -> Result<bool> {
        if let Some(workout) = self.manager.active_workout() {
            let logs = self.manager.workout_exercise_logs(workout.id);
            let completed = logs
                .iter()
                .filter(|log| log.is_complete())
                .copied()
                .collect::<Vec<_>>();
            println!("Workout progress ({} exercise(s) completed):", completed.len());
            for log in &completed {
                println!(
                    "  {}: {}",
                    log.exercise_name,
                    format::exercise_summary(log.set_count(), log.volume())
                );
            }
            let total = completed.iter().map(|log| log.volume()).sum::<f32>();
            println!("Total volume: {} lbs", format::volume(total));
        }

        let Some(line) =
            self.prompt("'add' another exercise, 'finish' the workout, or 'cancel' to discard")?
        else {
            return Ok(true);
        };

        match line.as_str() {
            "add" => self.manager.add_another_exercise(),
            "cancel" => self.manager.cancel_workout(),
            "finish" => {
                let started_at = self.manager.active_workout().map(|workout| workout.created_at);
                match self.manager.complete_workout() {
                    Ok(()) => {
                        if let (Some(started_at), Some(workout)) =
                            (started_at, self.manager.history().last())
                        {
                            if let Some(completed_at) = workout.completed_at {
                                println!(
                                    "Workout complete in {}",
                                    format::duration(started_at, completed_at)
                                );
                            }
                        }
                    }
                    Err(error) => println!("{error}"),
                }
            }
            other => println!("unknown command: {other}"),
        }

        Ok(false)
    }

    /// Prints a prompt and reads one trimmed line. `None` means the
    /// input ended.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        print!("{text}\n> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}
