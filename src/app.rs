//! Application state and core logic

use crate::crm::{contact_payload, deal_payload, CrmHostTrait, Entity, SearchField, WORKFLOW_TRIGGER};
use crate::state::{
    ui_area, validate, AppState, AreaOfInterest, SubmitStatus, BUTTON_SUBMIT, FIELD_AREAS,
    FIELD_BUTTONS, FIELD_OFFICE,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Injected CRM host capability
    host: Box<dyn CrmHostTrait>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance against the given host capability
    #[allow(clippy::field_reassign_with_default)]
    pub async fn new(host: Box<dyn CrmHostTrait>) -> Self {
        let mut state = AppState::default();

        // Probe the host bridge once; record operations fail visibly later
        // if it never answered
        state.host_connected = host.check_connection().await;
        if !state.host_connected {
            tracing::error!("CRM host bridge not reachable; record operations will fail");
        }

        Self {
            state,
            host,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Close the widget without writing anything
    fn cancel(&mut self) {
        self.quit = true;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_selector = self.state.form.active_field_index == FIELD_AREAS;
        let on_office = self.state.form.active_field_index == FIELD_OFFICE;
        let on_buttons = self.state.form.is_buttons_row_active();
        let selector_open = self.state.form.area_of_interest.is_open();

        match key.code {
            // Submit shortcut works from anywhere
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit().await;
            }
            KeyCode::Tab => {
                self.state.form.area_of_interest.close();
                self.state.form.next_field();
            }
            KeyCode::BackTab => {
                self.state.form.area_of_interest.close();
                self.state.form.prev_field();
            }
            KeyCode::Esc if selector_open => self.state.form.area_of_interest.close(),
            KeyCode::Esc => self.cancel(),
            // Selector panel
            KeyCode::Enter | KeyCode::Char(' ') if on_selector && !selector_open => {
                self.state.form.area_of_interest.open();
            }
            KeyCode::Enter if on_selector && selector_open => {
                self.state.form.area_of_interest.select_highlighted();
            }
            KeyCode::Up if on_selector && selector_open => {
                self.state.form.area_of_interest.highlight_prev();
            }
            KeyCode::Down if on_selector && selector_open => {
                self.state.form.area_of_interest.highlight_next();
            }
            KeyCode::Backspace if on_selector => self.state.form.area_of_interest.remove_last(),
            // Office select cycles through the fixed options
            KeyCode::Char(' ') | KeyCode::Right if on_office => self.state.form.cycle_office(),
            KeyCode::Left if on_office => self.state.form.cycle_office_back(),
            // Buttons row
            KeyCode::Left | KeyCode::Up if on_buttons => self.state.form.prev_button(),
            KeyCode::Right | KeyCode::Down if on_buttons => self.state.form.next_button(),
            KeyCode::Enter if on_buttons => {
                if self.state.form.selected_button == BUTTON_SUBMIT {
                    self.submit().await;
                } else {
                    self.cancel();
                }
            }
            // Text field input
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(c) => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Ok(());
        }

        // terminal_size is (height, width)
        let (term_height, term_width) = self.terminal_size.unwrap_or((24, 80));
        let col = mouse.column;
        let row = mouse.row;
        let was_open = self.state.form.area_of_interest.is_open();
        let in_selector = ui_area::selector_contains(col, row, term_width, term_height, was_open);

        // A press outside the selector's bounding region closes the panel;
        // the press still acts on whatever it landed on below
        if was_open && !in_selector {
            self.state.form.area_of_interest.close();
        }

        // Option rows of the open panel
        if was_open && in_selector {
            if let Some(index) = ui_area::dropdown_option_at_row(row, term_height) {
                self.state
                    .form
                    .area_of_interest
                    .select(AreaOfInterest::ALL[index]);
                return Ok(());
            }
        }

        // Tag remove affordance on the selector's content row
        if row == ui_area::areas_content_row() && col >= 1 && col < ui_area::form_width(term_width)
        {
            let labels = self.state.form.area_of_interest.labels();
            if let Some(tag) = ui_area::tag_remove_at_col(&labels, col - 1) {
                if let Some(option) = self.state.form.area_of_interest.selected().get(tag).copied()
                {
                    self.state.form.area_of_interest.remove(option);
                }
                self.state.form.set_active_field(FIELD_AREAS);
                return Ok(());
            }
        }

        // Action panel buttons
        if ui_area::in_action_panel(col, term_width) {
            if let Some(button) = ui_area::action_button_at_row(row) {
                self.state.form.set_active_field(FIELD_BUTTONS);
                self.state.form.selected_button = button;
                if button == BUTTON_SUBMIT {
                    self.submit().await;
                } else {
                    self.cancel();
                }
            }
            return Ok(());
        }

        // Field focus; pressing the selector's own box flips the panel
        if let Some(index) = ui_area::field_index_at_row(row) {
            self.state.form.set_active_field(index);
            if index == FIELD_AREAS
                && ui_area::selector_contains(col, row, term_width, term_height, false)
            {
                self.state.form.area_of_interest.toggle_open();
            }
        }
        Ok(())
    }

    /// Validate, then run the contact-then-deal upsert sequence.
    ///
    /// Contact resolution fully completes before the deal payload is built,
    /// so the deal always carries whatever reference resolution produced.
    pub async fn submit(&mut self) {
        let errors = validate(&self.state.form);
        let valid = errors.is_empty();
        // Replaces the mapping wholesale so stale messages never linger
        self.state.errors = errors;
        if !valid {
            tracing::debug!("validation failed; submission aborted");
            return;
        }

        self.state.submit_status = SubmitStatus::InFlight;

        let contact_id = self.resolve_contact_id().await;
        let payload = deal_payload(&self.state.form, &contact_id);
        let result = self
            .host
            .upsert_records(
                Entity::Deals,
                vec![payload],
                vec!["Deal_Name".to_string()],
                vec![WORKFLOW_TRIGGER.to_string()],
            )
            .await;

        match result {
            Ok(outcomes) => {
                if let Some(outcome) = outcomes.first() {
                    tracing::info!(deal_id = %outcome.id, action = ?outcome.action, "deal record upserted");
                }
                if let Err(err) = self.host.close_and_reload().await {
                    tracing::error!("failed to close widget via host: {err:#}");
                }
                self.state.form.clear();
                self.state.submit_status = SubmitStatus::Idle;
                self.quit = true;
            }
            Err(err) => {
                tracing::error!("deal upsert failed: {err:#}");
                self.state.submit_status =
                    SubmitStatus::Failed(format!("Submission failed: {err:#}"));
            }
        }
    }

    /// Resolve the contact reference for the deal: search by email, create
    /// the contact from the free-text name when no match exists. Failures
    /// are logged and leave the reference empty; the deal still posts.
    async fn resolve_contact_id(&mut self) -> String {
        let email = self.state.form.email.as_text().to_string();
        if email.is_empty() {
            return String::new();
        }

        let matches = match self
            .host
            .search_records(Entity::Contacts, SearchField::Email, &email)
            .await
        {
            Ok(matches) => matches,
            Err(err) => {
                tracing::error!("contact search failed: {err:#}");
                return String::new();
            }
        };

        if let Some(first) = matches.first() {
            tracing::debug!(contact_id = %first.id, "contact found by email");
            return first.id.clone();
        }

        let payload = contact_payload(self.state.form.contact.as_text(), &email);
        match self
            .host
            .upsert_records(
                Entity::Contacts,
                vec![payload],
                vec!["Email".to_string()],
                vec![WORKFLOW_TRIGGER.to_string()],
            )
            .await
        {
            Ok(outcomes) => {
                let id = outcomes.first().map(|o| o.id.clone()).unwrap_or_default();
                tracing::info!(contact_id = %id, "contact created");
                id
            }
            Err(err) => {
                tracing::error!("contact creation failed: {err:#}");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crm::{MockCrmHostTrait, RecordSummary, UpsertAction, UpsertOutcome};
    use crate::state::{ClgOffice, FieldId};
    use serde_json::json;

    fn connected_mock() -> MockCrmHostTrait {
        let mut mock = MockCrmHostTrait::new();
        mock.expect_check_connection().returning(|| true);
        mock
    }

    fn summary(id: &str) -> RecordSummary {
        RecordSummary {
            id: id.to_string(),
            full_name: None,
            email: None,
            created_time: None,
        }
    }

    fn outcome(id: &str) -> UpsertOutcome {
        UpsertOutcome {
            id: id.to_string(),
            action: UpsertAction::Insert,
        }
    }

    fn left_down(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn fill_valid_form(app: &mut App) {
        app.state.form.deal_name.set_text("Trust Setup");
        app.state.form.contact.set_text("John Smith");
        app.state.form.email.set_text("john@example.com");
        app.state
            .form
            .area_of_interest
            .select(AreaOfInterest::EstateTaxPlanning);
        app.state.form.clg_office = Some(ClgOffice::Davis);
    }

    #[tokio::test]
    async fn test_submit_aborts_on_invalid_form() {
        // Mock would panic on any unexpected record call
        let mut app = App::new(Box::new(connected_mock())).await;
        app.submit().await;
        assert_eq!(
            app.state.errors.get(FieldId::DealName),
            Some("Deal name is required.")
        );
        assert!(!app.should_quit());
        assert_eq!(app.state.submit_status, SubmitStatus::Idle);
    }

    #[tokio::test]
    async fn test_submit_links_existing_contact() {
        let mut mock = connected_mock();
        mock.expect_search_records()
            .withf(|entity, field, query| {
                *entity == Entity::Contacts
                    && *field == SearchField::Email
                    && query == "john@example.com"
            })
            .times(1)
            .returning(|_, _, _| Ok(vec![summary("4876")]));
        mock.expect_upsert_records()
            .withf(|entity, records, dedup, triggers| {
                *entity == Entity::Deals
                    && records[0]["Contact_Name"] == json!("4876")
                    && records[0]["Stage"] == json!("Start")
                    && records[0]["CLG_Office"] == json!("Davis Office")
                    && dedup == &["Deal_Name".to_string()]
                    && triggers == &["workflow".to_string()]
            })
            .times(1)
            .returning(|_, _, _, _| Ok(vec![outcome("9001")]));
        mock.expect_close_and_reload().times(1).returning(|| Ok(()));

        let mut app = App::new(Box::new(mock)).await;
        fill_valid_form(&mut app);
        app.submit().await;

        assert!(app.should_quit());
        assert_eq!(app.state.submit_status, SubmitStatus::Idle);
        assert_eq!(app.state.form.deal_name.as_text(), "");
    }

    #[tokio::test]
    async fn test_submit_creates_missing_contact_before_deal() {
        let mut mock = connected_mock();
        mock.expect_search_records()
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));
        // Contact upsert carries the split name and the Email dedup key
        mock.expect_upsert_records()
            .withf(|entity, records, dedup, _| {
                *entity == Entity::Contacts
                    && records[0]["First_Name"] == json!("John")
                    && records[0]["Last_Name"] == json!("Smith")
                    && records[0]["Email"] == json!("john@example.com")
                    && dedup == &["Email".to_string()]
            })
            .times(1)
            .returning(|_, _, _, _| Ok(vec![outcome("555")]));
        // The deal payload is built only after the contact id exists
        mock.expect_upsert_records()
            .withf(|entity, records, _, _| {
                *entity == Entity::Deals && records[0]["Contact_Name"] == json!("555")
            })
            .times(1)
            .returning(|_, _, _, _| Ok(vec![outcome("9002")]));
        mock.expect_close_and_reload().times(1).returning(|| Ok(()));

        let mut app = App::new(Box::new(mock)).await;
        fill_valid_form(&mut app);
        app.submit().await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_single_token_contact_becomes_last_name() {
        let mut mock = connected_mock();
        mock.expect_search_records()
            .times(1)
            .returning(|_, _, _| Ok(Vec::new()));
        mock.expect_upsert_records()
            .withf(|entity, records, _, _| {
                *entity == Entity::Contacts
                    && records[0]["First_Name"] == json!("")
                    && records[0]["Last_Name"] == json!("Cher")
            })
            .times(1)
            .returning(|_, _, _, _| Ok(vec![outcome("7")]));
        mock.expect_upsert_records()
            .withf(|entity, _, _, _| *entity == Entity::Deals)
            .times(1)
            .returning(|_, _, _, _| Ok(vec![outcome("9003")]));
        mock.expect_close_and_reload().times(1).returning(|| Ok(()));

        let mut app = App::new(Box::new(mock)).await;
        fill_valid_form(&mut app);
        app.state.form.contact.set_text("Cher");
        app.submit().await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_empty_email_skips_contact_branch() {
        let mut mock = connected_mock();
        mock.expect_search_records().times(0);
        mock.expect_upsert_records()
            .withf(|entity, records, _, _| {
                *entity == Entity::Deals && records[0]["Contact_Name"] == json!("")
            })
            .times(1)
            .returning(|_, _, _, _| Ok(vec![outcome("9004")]));
        mock.expect_close_and_reload().times(1).returning(|| Ok(()));

        let mut app = App::new(Box::new(mock)).await;
        app.state.form.deal_name.set_text("Walk-in");
        app.submit().await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_deal_failure_keeps_form_and_stays_open() {
        let mut mock = connected_mock();
        mock.expect_search_records()
            .returning(|_, _, _| Ok(vec![summary("4876")]));
        mock.expect_upsert_records()
            .returning(|_, _, _, _| Err(anyhow::anyhow!("bridge timed out")));
        mock.expect_close_and_reload().times(0);

        let mut app = App::new(Box::new(mock)).await;
        fill_valid_form(&mut app);
        app.submit().await;

        assert!(!app.should_quit());
        assert_eq!(app.state.form.deal_name.as_text(), "Trust Setup");
        assert!(matches!(
            app.state.submit_status,
            SubmitStatus::Failed(_)
        ));
    }

    #[tokio::test]
    async fn test_contact_search_failure_posts_deal_unlinked() {
        let mut mock = connected_mock();
        mock.expect_search_records()
            .returning(|_, _, _| Err(anyhow::anyhow!("bridge down")));
        mock.expect_upsert_records()
            .withf(|entity, records, _, _| {
                *entity == Entity::Deals && records[0]["Contact_Name"] == json!("")
            })
            .times(1)
            .returning(|_, _, _, _| Ok(vec![outcome("9005")]));
        mock.expect_close_and_reload().times(1).returning(|| Ok(()));

        let mut app = App::new(Box::new(mock)).await;
        fill_valid_form(&mut app);
        app.submit().await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_outside_press_closes_selector() {
        let mut app = App::new(Box::new(connected_mock())).await;
        app.terminal_size = Some((40, 80));
        app.state.form.set_active_field(FIELD_AREAS);
        app.state.form.area_of_interest.open();

        // A press inside the open panel selects and stays open
        app.handle_mouse(left_down(5, 20)).await.unwrap();
        assert!(app.state.form.area_of_interest.is_open());
        assert_eq!(
            app.state.form.area_of_interest.selected(),
            &[AreaOfInterest::ALL[0]]
        );

        // A press on another field's box closes the panel
        app.handle_mouse(left_down(5, 9)).await.unwrap();
        assert!(!app.state.form.area_of_interest.is_open());
    }

    #[tokio::test]
    async fn test_press_on_collapsed_box_opens_panel() {
        let mut app = App::new(Box::new(connected_mock())).await;
        app.terminal_size = Some((40, 80));
        app.handle_mouse(left_down(5, 16)).await.unwrap();
        assert!(app.state.form.area_of_interest.is_open());
        assert_eq!(app.state.form.active_field_index, FIELD_AREAS);
    }

    #[tokio::test]
    async fn test_tag_remove_click() {
        let mut app = App::new(Box::new(connected_mock())).await;
        app.terminal_size = Some((40, 80));
        app.state
            .form
            .area_of_interest
            .select(AreaOfInterest::AssetProtection);
        // "Asset Protection ×": the × sits at content column 17, screen 18
        app.handle_mouse(left_down(18, 17)).await.unwrap();
        assert!(app.state.form.area_of_interest.selected().is_empty());
    }

    #[tokio::test]
    async fn test_esc_closes_panel_before_widget() {
        let mut app = App::new(Box::new(connected_mock())).await;
        app.state.form.set_active_field(FIELD_AREAS);
        app.state.form.area_of_interest.open();
        app.handle_key(KeyEvent::from(KeyCode::Esc)).await.unwrap();
        assert!(!app.state.form.area_of_interest.is_open());
        assert!(!app.should_quit());
        app.handle_key(KeyEvent::from(KeyCode::Esc)).await.unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_typing_routes_to_focused_field() {
        let mut app = App::new(Box::new(connected_mock())).await;
        app.handle_key(KeyEvent::from(KeyCode::Char('T'))).await.unwrap();
        app.handle_key(KeyEvent::from(KeyCode::Tab)).await.unwrap();
        app.handle_key(KeyEvent::from(KeyCode::Char('J'))).await.unwrap();
        assert_eq!(app.state.form.deal_name.as_text(), "T");
        assert_eq!(app.state.form.contact.as_text(), "J");
    }
}
