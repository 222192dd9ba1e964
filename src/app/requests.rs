//! Request dispatch: runs commands on the tokio runtime and hands outcomes
//! back to the UI thread.

use super::App;
use crate::api::EmployeeClient;
use crate::types::*;
use eframe::egui;
use tokio::sync::mpsc;
use tracing::debug;

pub struct Requests {
    client: EmployeeClient,
    handle: tokio::runtime::Handle,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
    outcome_rx: mpsc::UnboundedReceiver<Outcome>,
    in_flight: usize,
}

impl Requests {
    pub fn new(client: EmployeeClient, handle: tokio::runtime::Handle) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            client,
            handle,
            outcome_tx,
            outcome_rx,
            in_flight: 0,
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Spawn one request. No ordering between requests: whichever finishes
    /// last is applied last.
    pub fn send(&mut self, command: Command, ctx: &egui::Context) {
        debug!(?command, "Sending request");
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        let ctx = ctx.clone();
        self.in_flight += 1;

        self.handle.spawn(async move {
            let outcome = client.execute(command).await;
            if tx.send(outcome).is_err() {
                debug!("Outcome dropped, receiver closed");
            }
            ctx.request_repaint();
        });
    }

    /// Next finished request, if any, without blocking.
    pub fn try_next(&mut self) -> Option<Outcome> {
        let outcome = self.outcome_rx.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(outcome)
    }

    #[cfg(test)]
    async fn next(&mut self) -> Option<Outcome> {
        let outcome = self.outcome_rx.recv().await?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(outcome)
    }
}

impl App {
    /// Apply every finished request, sending any follow-up refresh.
    pub fn poll_outcomes(&mut self, ctx: &egui::Context) {
        while let Some(outcome) = self.requests.try_next() {
            if let Some(next) = self.roster.apply(outcome) {
                self.requests.send(next, ctx);
            }
        }
    }

    pub fn load_employees(&mut self, ctx: &egui::Context) {
        let command = self.roster.load();
        self.requests.send(command, ctx);
    }

    pub fn submit_form(&mut self, ctx: &egui::Context) {
        if let Some(command) = self.roster.submit() {
            self.requests.send(command, ctx);
        }
    }

    pub fn delete_employee(&mut self, id: i64, ctx: &egui::Context) {
        let command = self.roster.delete(id);
        self.requests.send(command, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{employee, shared, spawn, SharedBackend};
    use crate::app::form::EmployeeForm;
    use crate::app::roster::Roster;
    use crate::constants::FETCH_ERROR;

    async fn setup(backend: SharedBackend) -> (Requests, Roster, egui::Context) {
        let base_url = spawn(backend).await;
        let requests = Requests::new(
            EmployeeClient::new(&base_url),
            tokio::runtime::Handle::current(),
        );
        (requests, Roster::default(), egui::Context::default())
    }

    /// Drive requests and their follow-ups until nothing is in flight.
    async fn settle(requests: &mut Requests, roster: &mut Roster, ctx: &egui::Context) {
        while requests.in_flight() > 0 {
            let outcome = requests.next().await.unwrap();
            if let Some(next) = roster.apply(outcome) {
                requests.send(next, ctx);
            }
        }
    }

    #[tokio::test]
    async fn create_sends_one_post_then_one_refresh() {
        let backend = shared(Vec::new());
        let (mut requests, mut roster, ctx) = setup(backend.clone()).await;

        roster.set_field(Field::Name, "Ada");
        roster.set_field(Field::Position, "Eng");
        roster.set_field(Field::Department, "R&D");
        roster.set_field(Field::Salary, "1500");
        let command = roster.submit().unwrap();
        requests.send(command, &ctx);
        settle(&mut requests, &mut roster, &ctx).await;

        let b = backend.lock().unwrap();
        assert_eq!(b.requests, vec!["POST /employees/employee", "GET /employees/all"]);
        assert_eq!(b.last_body, Some(employee(0, "Ada", 1500.0)));
        assert_eq!(roster.employees, vec![employee(1, "Ada", 1500.0)]);
        assert_eq!(roster.form, EmployeeForm::default());
        assert!(roster.error.is_none());
    }

    #[tokio::test]
    async fn edit_sends_put_by_id_and_leaves_edit_mode() {
        let backend = shared(vec![employee(5, "Old", 10.0)]);
        let (mut requests, mut roster, ctx) = setup(backend.clone()).await;

        requests.send(roster.load(), &ctx);
        settle(&mut requests, &mut roster, &ctx).await;

        let selected = roster.employees[0].clone();
        roster.begin_edit(&selected);
        roster.set_field(Field::Name, "New");
        let command = roster.submit().unwrap();
        requests.send(command, &ctx);
        settle(&mut requests, &mut roster, &ctx).await;

        assert_eq!(
            backend.lock().unwrap().requests,
            vec!["GET /employees/all", "PUT /employees/id?id=5", "GET /employees/all"]
        );
        assert!(!roster.editing);
        assert_eq!(roster.employees, vec![employee(5, "New", 10.0)]);
    }

    #[tokio::test]
    async fn failed_delete_still_refreshes_silently() {
        let backend = shared(vec![employee(1, "Keep", 1.0)]);
        let (mut requests, mut roster, ctx) = setup(backend.clone()).await;

        requests.send(roster.delete(9), &ctx);
        settle(&mut requests, &mut roster, &ctx).await;

        assert_eq!(
            backend.lock().unwrap().requests,
            vec!["DELETE /employees/id?id=9", "GET /employees/all"]
        );
        assert!(roster.error.is_none());
        assert_eq!(roster.employees, vec![employee(1, "Keep", 1.0)]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_displayed_list() {
        let backend = shared(vec![employee(1, "A", 1000.0)]);
        let (mut requests, mut roster, ctx) = setup(backend.clone()).await;

        requests.send(roster.load(), &ctx);
        settle(&mut requests, &mut roster, &ctx).await;
        backend.lock().unwrap().failing = true;
        requests.send(roster.load(), &ctx);
        settle(&mut requests, &mut roster, &ctx).await;

        assert_eq!(roster.employees, vec![employee(1, "A", 1000.0)]);
        assert_eq!(roster.error.as_deref(), Some(FETCH_ERROR));
    }

    #[tokio::test]
    async fn loaded_employee_renders_as_summary_line() {
        let backend = shared(vec![employee(1, "A", 1000.0)]);
        let (mut requests, mut roster, ctx) = setup(backend).await;

        requests.send(roster.load(), &ctx);
        settle(&mut requests, &mut roster, &ctx).await;

        let lines: Vec<String> = roster.employees.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["A - Eng - R&D - $1000"]);
    }
}
