use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::TableState;
use stridelog_core::{AddOutcome, Workout, WorkoutForm, WorkoutLog};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Adding,
    Modifying,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    Date,
    Km,
}

pub struct App {
    pub log: WorkoutLog,
    pub state: TableState,
    pub form: WorkoutForm,
    pub focus: Field,
    pub modify_input: String,
    pub modify_target: Option<Uuid>,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    /// Validation message that blocks input until dismissed.
    pub notice: Option<String>,
    pub status: Option<String>,
}

impl App {
    pub fn new(log: WorkoutLog) -> App {
        let mut state = TableState::default();
        if !log.is_empty() {
            state.select(Some(0));
        }
        App {
            log,
            state,
            form: WorkoutForm::new(),
            focus: Field::Date,
            modify_input: String::new(),
            modify_target: None,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            notice: None,
            status: None,
        }
    }

    /// Rows in display order, recomputed from the log on every call.
    pub fn rows(&self) -> Vec<Workout> {
        self.log.sorted_descending()
    }

    pub fn selected_workout(&self) -> Option<Workout> {
        let i = self.state.selected()?;
        self.rows().into_iter().nth(i)
    }

    /// Returns false when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return true;
        }

        match self.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => return false,
                KeyCode::Down | KeyCode::Char('j') => self.next(),
                KeyCode::Up | KeyCode::Char('k') => self.previous(),
                KeyCode::Char('a') => self.enter_add_mode(),
                KeyCode::Char('e') => self.edit_selected(),
                KeyCode::Char('m') => self.enter_modify_mode(),
                KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
                _ => {}
            },
            InputMode::Adding | InputMode::Modifying => match key.code {
                KeyCode::Enter => self.submit(),
                KeyCode::Esc => self.exit_input_mode(),
                KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
                KeyCode::Char(c) => self.input_char(c),
                KeyCode::Backspace => self.delete_char(),
                KeyCode::Left => self.move_cursor_left(),
                KeyCode::Right => self.move_cursor_right(),
                _ => {}
            },
        }
        true
    }

    pub fn next(&mut self) {
        let len = self.log.len();
        if len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.log.len();
        if len == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn delete_selected(&mut self) {
        let Some(i) = self.state.selected() else {
            return;
        };
        if let Some(workout) = self.selected_workout() {
            self.log.delete(&workout.id);
            self.status = Some(format!("Deleted {}", workout.date));
        }
        self.clamp_selection(i);
    }

    /// Moves the selected entry into the form and removes it from the log.
    pub fn edit_selected(&mut self) {
        let Some(i) = self.state.selected() else {
            return;
        };
        let Some(workout) = self.selected_workout() else {
            return;
        };
        if self.log.edit(&workout.id, &mut self.form).is_some() {
            info!(date = %workout.date, "editing workout");
            self.status = Some(format!("Editing {}", workout.date));
            self.clamp_selection(i);
            self.input_mode = InputMode::Adding;
            self.set_focus(Field::Km);
        }
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.set_focus(Field::Date);
    }

    pub fn enter_modify_mode(&mut self) {
        if let Some(workout) = self.selected_workout() {
            self.modify_target = Some(workout.id);
            self.modify_input = workout.km.to_string();
            self.input_mode = InputMode::Modifying;
            self.cursor_position = self.modify_input.chars().count();
        }
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
        self.modify_target = None;
    }

    pub fn toggle_focus(&mut self) {
        if self.input_mode != InputMode::Adding {
            return;
        }
        let next = match self.focus {
            Field::Date => Field::Km,
            Field::Km => Field::Date,
        };
        self.set_focus(next);
    }

    fn set_focus(&mut self, field: Field) {
        self.focus = field;
        self.cursor_position = self.active_input().chars().count();
    }

    pub fn active_input(&self) -> &str {
        match (self.input_mode, self.focus) {
            (InputMode::Modifying, _) => &self.modify_input,
            (_, Field::Date) => &self.form.date,
            (_, Field::Km) => &self.form.km,
        }
    }

    fn active_input_mut(&mut self) -> &mut String {
        match (self.input_mode, self.focus) {
            (InputMode::Modifying, _) => &mut self.modify_input,
            (_, Field::Date) => &mut self.form.date,
            (_, Field::Km) => &mut self.form.km,
        }
    }

    pub fn input_char(&mut self, c: char) {
        let pos = self.cursor_position;
        let input = self.active_input_mut();
        let byte_index = input.chars().take(pos).map(|c| c.len_utf8()).sum();
        input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let pos = self.cursor_position;
            let input = self.active_input_mut();
            let byte_index: usize = input.chars().take(pos - 1).map(|c| c.len_utf8()).sum();
            input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.active_input().chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit(&mut self) {
        match self.input_mode {
            InputMode::Adding => self.submit_add(),
            InputMode::Modifying => self.submit_modify(),
            InputMode::Normal => {}
        }
    }

    fn submit_add(&mut self) {
        match self.form.submit(&mut self.log) {
            Ok(outcome) => {
                let (verb, workout) = match &outcome {
                    AddOutcome::Created(w) => ("Added", w),
                    AddOutcome::Merged(w) => ("Merged into", w),
                };
                self.status = Some(format!(
                    "{} {} ({} km)",
                    verb,
                    workout.date,
                    workout.km_display()
                ));
                self.select_id(&workout.id);
                self.set_focus(Field::Date);
                self.exit_input_mode();
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn submit_modify(&mut self) {
        let Some(id) = self.modify_target else {
            self.exit_input_mode();
            return;
        };
        match self.log.update_distance(&id, &self.modify_input) {
            Ok(updated) => {
                if let Some(w) = updated {
                    self.status = Some(format!("Updated {} ({} km)", w.date, w.km_display()));
                }
                self.modify_input.clear();
                self.exit_input_mode();
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn select_id(&mut self, id: &Uuid) {
        let index = self.rows().iter().position(|w| w.id == *id);
        self.state.select(index);
    }

    fn clamp_selection(&mut self, previous: usize) {
        let len = self.log.len();
        if len == 0 {
            self.state.select(None);
        } else if previous >= len {
            self.state.select(Some(len - 1));
        } else {
            self.state.select(Some(previous));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn dates(app: &App) -> Vec<String> {
        app.rows().into_iter().map(|w| w.date).collect()
    }

    #[test]
    fn test_add_through_form() {
        let mut app = App::new(WorkoutLog::new());
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "20.07.19");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "5.7");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.form, WorkoutForm::default());
        assert_eq!(dates(&app), vec!["20.07.19"]);
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_invalid_entry_blocks_until_dismissed() {
        let mut app = App::new(WorkoutLog::new());
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "2023.07.19");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "5");
        press(&mut app, KeyCode::Enter);

        assert!(app.notice.as_deref().unwrap().contains("Invalid date"));
        assert!(app.log.is_empty());

        // swallowed while the notice is open
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.form.km, "5");

        press(&mut app, KeyCode::Enter);
        assert!(app.notice.is_none());
        assert_eq!(app.input_mode, InputMode::Adding);
        assert_eq!(app.form.date, "2023.07.19");
    }

    #[test]
    fn test_same_date_merges() {
        let mut app = App::new(WorkoutLog::with_sample_data());
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "20.07.19");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "2.3");
        press(&mut app, KeyCode::Enter);

        let rows = app.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].km_display(), "8.0");
        assert!(app.status.as_deref().unwrap().starts_with("Merged into"));
    }

    #[test]
    fn test_delete_selected() {
        let mut app = App::new(WorkoutLog::with_sample_data());
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));

        assert_eq!(dates(&app), vec!["20.07.19", "18.07.19"]);
        assert_eq!(app.state.selected(), Some(1));

        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Delete);
        assert!(app.log.is_empty());
        assert_eq!(app.state.selected(), None);

        // nothing left to delete
        press(&mut app, KeyCode::Char('d'));
        assert!(app.log.is_empty());
    }

    #[test]
    fn test_edit_moves_entry_into_form() {
        let mut app = App::new(WorkoutLog::with_sample_data());
        press(&mut app, KeyCode::Char('e'));

        assert_eq!(app.input_mode, InputMode::Adding);
        assert_eq!(app.focus, Field::Km);
        assert_eq!(app.form.date, "20.07.19");
        assert_eq!(app.form.km, "5.7");
        assert_eq!(dates(&app), vec!["19.07.19", "18.07.19"]);

        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "9");
        press(&mut app, KeyCode::Enter);

        let rows = app.rows();
        assert_eq!(rows[0].date, "20.07.19");
        assert_eq!(rows[0].km_display(), "5.9");
    }

    #[test]
    fn test_modify_updates_in_place() {
        let mut app = App::new(WorkoutLog::with_sample_data());
        let before = app.selected_workout().unwrap();
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.active_input(), "5.7");

        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "12");
        press(&mut app, KeyCode::Enter);

        let after = app.log.get(&before.id).unwrap();
        assert_eq!(after.km, 12.0);
        assert_eq!(after.date, before.date);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_cursor_editing() {
        let mut app = App::new(WorkoutLog::new());
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "2007.19");
        for _ in 0..5 {
            press(&mut app, KeyCode::Left);
        }
        press(&mut app, KeyCode::Char('.'));
        assert_eq!(app.form.date, "20.07.19");

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.date, "20.7.19");
    }

    #[test]
    fn test_quit_and_navigation_wrap() {
        let mut app = App::new(WorkoutLog::with_sample_data());
        press(&mut app, KeyCode::Up);
        assert_eq!(app.state.selected(), Some(2));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.selected(), Some(0));

        assert!(!press(&mut app, KeyCode::Char('q')));
    }
}
