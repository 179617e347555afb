//! Contact form validation and simulated submission.
//!
//! Fields validate on blur, and on input only while they already show an
//! error. Submitting validates everything; when valid, the form locks, a
//! fixed delay stands in for the network request, then the form unlocks,
//! clears, and shows a success line that clears itself after a second delay.
//!
//! DESIGN
//! ======
//! The delayed half of submission runs as a cancellable task on the
//! injected spawner, sleeping on the injected [`Timer`]. A new submission
//! cancels the previous task, which at that point can only be waiting to
//! clear its success line.
//!
//! A form without a submit control still submits; the missing control is
//! reported once at install and only the busy label is skipped.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::task::LocalSpawn;

use crate::config::{ContactConfig, FieldIds};
use crate::error::PageError;
use crate::state::form::{FieldName, FieldStatus, SubmissionPhase, first_invalid};
use crate::surface::{Event, EventKind, Surface, Target};
use crate::util::email::check_field;
use crate::util::task::{TaskHandle, spawn_cancellable};
use crate::util::timer::Timer;

const BORDER_COLOR: &str = "border-color";
const COLOR: &str = "color";

struct BoundField<E> {
    name: FieldName,
    input: E,
    error: E,
}

pub struct ContactForm<S: Surface> {
    surface: S,
    form: S::Element,
    status: Option<S::Element>,
    submit: Option<S::Element>,
    fields: Vec<BoundField<S::Element>>,
    cfg: ContactConfig,
    timer: Rc<dyn Timer>,
    spawner: Rc<dyn LocalSpawn>,
    phase: Cell<SubmissionPhase>,
    /// Submit control markup saved while the busy label is showing.
    saved_label: RefCell<Option<String>>,
    in_flight: RefCell<Option<TaskHandle>>,
}

impl<S: Surface> ContactForm<S> {
    /// Bind the form and its fields. `None` if the form element is missing.
    pub fn install(
        surface: &S,
        cfg: &ContactConfig,
        timer: Rc<dyn Timer>,
        spawner: Rc<dyn LocalSpawn>,
    ) -> Option<Rc<Self>> {
        let Some(form) = surface.element_by_id(&cfg.form_id) else {
            log::debug!("contact: form #{} missing, validation disabled", cfg.form_id);
            return None;
        };
        let status = surface.element_by_id(&cfg.status_id);
        let submit = surface.query_in(&form, &cfg.submit_selector);
        if submit.is_none() {
            log::warn!("contact: {}", PageError::missing(&cfg.submit_selector));
        }

        let fields = FieldName::ALL
            .into_iter()
            .filter_map(|name| bind_field(surface, name, field_ids(cfg, name)))
            .collect();

        let contact = Rc::new(Self {
            surface: surface.clone(),
            form: form.clone(),
            status,
            submit,
            fields,
            cfg: cfg.clone(),
            timer,
            spawner,
            phase: Cell::new(SubmissionPhase::Idle),
            saved_label: RefCell::new(None),
            in_flight: RefCell::new(None),
        });

        for index in 0..contact.fields.len() {
            let input = contact.fields[index].input.clone();

            let c = Rc::clone(&contact);
            surface.listen(
                Target::Element(input.clone()),
                EventKind::Blur,
                Rc::new(move |_ev: &Event<S::Element>| {
                    c.validate_field(&c.fields[index]);
                }),
            );

            let c = Rc::clone(&contact);
            surface.listen(
                Target::Element(input),
                EventKind::Input,
                Rc::new(move |_ev: &Event<S::Element>| {
                    let field = &c.fields[index];
                    if !c.surface.text(&field.error).is_empty() {
                        c.validate_field(field);
                    }
                }),
            );
        }

        let c = Rc::clone(&contact);
        surface.listen(Target::Element(form), EventKind::Submit, Rc::new(move |ev: &Event<S::Element>| c.on_submit(ev)));

        Some(contact)
    }

    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase.get()
    }

    /// Validate one field by name. Unbound fields count as valid.
    pub fn validate(&self, name: FieldName) -> FieldStatus {
        self.fields.iter().find(|f| f.name == name).map_or(FieldStatus::Valid, |f| self.validate_field(f))
    }

    /// Cancel pending work. A submission still in its delay is unlocked
    /// without reporting success.
    pub fn shutdown(&self) {
        if let Some(task) = self.in_flight.borrow_mut().take() {
            task.cancel();
        }
        if self.phase.get() == SubmissionPhase::Submitting {
            self.unlock();
            self.phase.set(SubmissionPhase::Idle);
        }
    }

    fn on_submit(self: &Rc<Self>, ev: &Event<S::Element>) {
        ev.prevent_default();
        if !self.phase.get().accepts_submit() {
            log::debug!("contact: submit ignored while {:?}", self.phase.get());
            return;
        }

        self.phase.set(SubmissionPhase::Validating);
        self.clear_errors();
        let statuses: Vec<(FieldName, FieldStatus)> =
            self.fields.iter().map(|f| (f.name, self.validate_field(f))).collect();
        let all_valid = statuses.iter().all(|(_, s)| s.is_valid());
        self.phase.set(SubmissionPhase::after_validation(all_valid));

        if !all_valid {
            self.set_status(&self.cfg.summary_message, &self.cfg.error_color);
            if let Some(field) = first_invalid(&statuses).and_then(|name| self.fields.iter().find(|f| f.name == name))
            {
                self.surface.focus(&field.input);
            }
            self.phase.set(SubmissionPhase::Idle);
            return;
        }

        self.begin_submission();
    }

    fn begin_submission(self: &Rc<Self>) {
        if let Some(previous) = self.in_flight.borrow_mut().take() {
            previous.cancel();
        }
        self.lock();

        let this = Rc::clone(self);
        let work = async move {
            this.timer.sleep(this.cfg.submit_delay_ms).await;
            this.unlock();
            this.set_status(&this.cfg.success_message, &this.cfg.success_color);
            this.surface.reset_form(&this.form);
            this.phase.set(SubmissionPhase::Idle);
            log::info!("contact: message accepted");

            this.timer.sleep(this.cfg.status_clear_ms).await;
            this.set_status("", "");
        };

        match spawn_cancellable(self.spawner.as_ref(), "contact-submit", work) {
            Ok(handle) => {
                self.in_flight.replace(Some(handle));
            }
            Err(err) => {
                log::error!("contact: {err}");
                self.unlock();
                self.phase.set(SubmissionPhase::Idle);
            }
        }
    }

    /// Disable every control and show the busy label.
    fn lock(&self) {
        if let Some(submit) = &self.submit {
            self.saved_label.replace(Some(self.surface.inner_html(submit)));
            self.surface.set_disabled(submit, true);
            self.surface.set_inner_html(submit, &self.cfg.busy_label_html);
        }
        self.set_controls_disabled(true);
    }

    fn unlock(&self) {
        if let Some(submit) = &self.submit {
            self.surface.set_disabled(submit, false);
            if let Some(label) = self.saved_label.take() {
                self.surface.set_inner_html(submit, &label);
            }
        }
        self.set_controls_disabled(false);
    }

    fn set_controls_disabled(&self, disabled: bool) {
        for control in self.surface.query_all_in(&self.form, &self.cfg.control_selector) {
            self.surface.set_disabled(&control, disabled);
        }
    }

    fn validate_field(&self, field: &BoundField<S::Element>) -> FieldStatus {
        let value = self.surface.value(&field.input);
        let status = FieldStatus::from(check_field(field.name.kind(), &value));
        self.surface.set_text(&field.error, status.message(&self.cfg));
        let border = if status.is_valid() { "" } else { self.cfg.error_color.as_str() };
        self.surface.set_style(&field.input, BORDER_COLOR, border);
        status
    }

    fn clear_errors(&self) {
        for field in &self.fields {
            self.surface.set_text(&field.error, "");
        }
        self.set_status("", "");
    }

    fn set_status(&self, text: &str, color: &str) {
        if let Some(status) = &self.status {
            self.surface.set_text(status, text);
            self.surface.set_style(status, COLOR, color);
        }
    }
}

fn field_ids(cfg: &ContactConfig, name: FieldName) -> &FieldIds {
    match name {
        FieldName::Name => &cfg.name,
        FieldName::Email => &cfg.email,
        FieldName::Message => &cfg.message,
    }
}

fn bind_field<S: Surface>(surface: &S, name: FieldName, ids: &FieldIds) -> Option<BoundField<S::Element>> {
    let input = surface.element_by_id(&ids.input);
    let error = surface.element_by_id(&ids.error);
    let (Some(input), Some(error)) = (input, error) else {
        log::debug!("contact: {} field incomplete, not validated", name.as_str());
        return None;
    };
    Some(BoundField { name, input, error })
}
