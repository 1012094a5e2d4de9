use gpui::{
    AnyElement, App, AppContext, ClickEvent, Context, Div, Entity, FocusHandle, Focusable, Hsla,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString, StatefulInteractiveElement,
    Styled, Subscription, TextAlign, Window, div, prelude::FluentBuilder, px,
};
use gpui_component::{
    IndexPath, Sizable, Theme,
    button::{Button, ButtonVariants},
    checkbox::Checkbox,
    h_flex,
    input::{Input, InputEvent, InputState, MaskPattern},
    select::{Select, SelectEvent, SelectState},
    v_flex,
};
use job_core::{
    Field, FormController, Position, Skill, SubmitOutcome, Summary, interview_time_value,
};
use tracing::{debug, info, warn};

use crate::{CloseSummary, components::Modal};

/// Key context used to scope the Escape binding to this form.
pub const KEY_CONTEXT: &str = "JobApplicationForm";

const POSITION_PLACEHOLDER: &str = "Select";

/// The job registration form and its summary dialog.
pub struct JobApplicationForm {
    controller: FormController,
    focus_handle: FocusHandle,

    full_name: Entity<InputState>,
    email: Entity<InputState>,
    phone_number: Entity<InputState>,
    position: Entity<SelectState<Vec<SharedString>>>,
    relevant_experience: Entity<InputState>,
    portfolio_url: Entity<InputState>,
    management_experience: Entity<InputState>,
    interview_time: Entity<InputState>,

    _subscriptions: Vec<Subscription>,
}

impl JobApplicationForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let full_name = make_text_input("Full name", window, cx);
        let email = make_text_input("name@example.com", window, cx);
        let phone_number = make_text_input("Digits only", window, cx);
        let relevant_experience = cx.new(|closure_cx| {
            InputState::new(window, closure_cx)
                .mask_pattern(experience_mask())
                .placeholder("Years")
        });
        let portfolio_url = make_text_input("https://", window, cx);
        let management_experience = cx.new(|closure_cx| {
            InputState::new(window, closure_cx)
                .multi_line(true)
                .placeholder("Teams, budgets, responsibilities")
        });
        let interview_time = make_text_input("YYYY-MM-DDTHH:MM", window, cx);

        let position = cx.new(|closure_cx| {
            SelectState::new(
                position_items(),
                Some(IndexPath::default().row(0)),
                window,
                closure_cx,
            )
        });

        let mut subscriptions = Vec::new();
        for (field, input) in [
            (Field::FullName, &full_name),
            (Field::Email, &email),
            (Field::PhoneNumber, &phone_number),
            (Field::RelevantExperience, &relevant_experience),
            (Field::PortfolioUrl, &portfolio_url),
            (Field::ManagementExperience, &management_experience),
            (Field::InterviewTime, &interview_time),
        ] {
            subscriptions.push(cx.subscribe_in(
                input,
                window,
                move |this, state, event: &InputEvent, _window, cx| {
                    if matches!(event, InputEvent::Change { .. }) {
                        let raw = state.read(cx).value().to_string();
                        this.apply_change(field, stored_value(field, &raw), false, cx);
                    }
                },
            ));
        }
        subscriptions.push(cx.subscribe_in(
            &position,
            window,
            |this, state, event: &SelectEvent<Vec<SharedString>>, _window, cx| {
                if matches!(event, SelectEvent::Confirm(..)) {
                    let selected = state.read(cx).selected_value().map(|v| v.to_string());
                    let value = position_option_value(selected.as_deref()).to_string();
                    this.apply_change(Field::Position, &value, false, cx);
                }
            },
        ));

        info!("Job application form constructed");
        Self {
            controller: FormController::new(),
            focus_handle: cx.focus_handle(),
            full_name,
            email,
            phone_number,
            position,
            relevant_experience,
            portfolio_url,
            management_experience,
            interview_time,
            _subscriptions: subscriptions,
        }
    }

    fn apply_change(
        &mut self,
        field: Field,
        value: &str,
        checked: bool,
        cx: &mut Context<Self>,
    ) {
        if let Err(error) = self.controller.on_field_change(field.name(), value, checked) {
            warn!(%error, "ignored change event");
            return;
        }
        cx.notify();
    }

    fn on_submit(
        &mut self,
        _: &ClickEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match self.controller.submit() {
            SubmitOutcome::Accepted(summary) => {
                debug!("{summary}");
                // Escape closes the dialog only while focus is inside the form.
                window.focus(&self.focus_handle);
            }
            SubmitOutcome::Rejected(errors) => {
                debug!(count = errors.len(), "submit blocked");
            }
        }
        cx.notify();
    }

    fn close_summary(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        self.controller.close_modal();
        cx.notify();
    }

    fn on_close_summary(
        &mut self,
        _: &CloseSummary,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.close_summary(cx);
    }

    fn input_for(
        &self,
        field: Field,
    ) -> Option<&Entity<InputState>> {
        match field {
            Field::FullName => Some(&self.full_name),
            Field::Email => Some(&self.email),
            Field::PhoneNumber => Some(&self.phone_number),
            Field::RelevantExperience => Some(&self.relevant_experience),
            Field::PortfolioUrl => Some(&self.portfolio_url),
            Field::ManagementExperience => Some(&self.management_experience),
            Field::InterviewTime => Some(&self.interview_time),
            Field::Position | Field::AdditionalSkills => None,
        }
    }

    fn error_text(
        &self,
        field: Field,
    ) -> Option<String> {
        self.controller.errors().message(field)
    }

    fn render_input_row(
        &self,
        field: Field,
        danger: Hsla,
    ) -> Option<Div> {
        if !self.controller.is_visible(field) {
            return None;
        }
        let input = self.input_for(field)?;
        Some(make_field_row(
            field,
            Input::new(input).flex_grow(),
            self.error_text(field),
            danger,
        ))
    }

    fn render_skills(
        &self,
        danger: Hsla,
        cx: &mut Context<Self>,
    ) -> Div {
        let state = self.controller.state();
        let boxes = Skill::all().iter().map(|&skill| {
            Checkbox::new(SharedString::from(format!("skill-{}", skill.value())))
                .label(skill.label())
                .checked(state.has_skill(skill))
                .on_click(cx.listener(move |this, checked: &bool, _window, cx| {
                    this.apply_change(Field::AdditionalSkills, skill.value(), *checked, cx);
                }))
        });

        make_field_row(
            Field::AdditionalSkills,
            h_flex().flex_wrap().gap_3().flex_grow().children(boxes),
            self.error_text(Field::AdditionalSkills),
            danger,
        )
    }

    fn render_summary(&self) -> Vec<AnyElement> {
        self.controller
            .summary()
            .map(|summary| {
                summary
                    .lines()
                    .iter()
                    .map(|line| {
                        div()
                            .child(format!("{}: {}", line.label, line.value))
                            .into_any_element()
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Focusable for JobApplicationForm {
    fn focus_handle(
        &self,
        _: &App,
    ) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for JobApplicationForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let danger = Theme::global(cx).colors.danger;
        let weak = cx.entity().downgrade();

        let fields = v_flex()
            .id("job-form-fields")
            .size_full()
            .p_5()
            .gap_2()
            .overflow_y_scroll()
            .child(div().text_2xl().child("Job Registration Form"))
            .children(self.render_input_row(Field::FullName, danger))
            .children(self.render_input_row(Field::Email, danger))
            .children(self.render_input_row(Field::PhoneNumber, danger))
            .child(make_field_row(
                Field::Position,
                Select::new(&self.position).w_full(),
                self.error_text(Field::Position),
                danger,
            ))
            .children(self.render_input_row(Field::RelevantExperience, danger))
            .children(self.render_input_row(Field::PortfolioUrl, danger))
            .children(self.render_input_row(Field::ManagementExperience, danger))
            .child(self.render_skills(danger, cx))
            .children(self.render_input_row(Field::InterviewTime, danger))
            .child(
                h_flex().p_1().justify_center().child(
                    Button::new("submit")
                        .primary()
                        .large()
                        .w(px(140.))
                        .label("Submit")
                        .on_click(cx.listener(Self::on_submit)),
                ),
            );

        div()
            .relative()
            .size_full()
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_close_summary))
            .child(fields)
            .child(
                Modal::new("summary")
                    .visible(self.controller.is_modal_open())
                    .title(Summary::TITLE)
                    .on_close(move |_window, cx| {
                        if let Err(error) = weak.update(cx, |this, cx| this.close_summary(cx)) {
                            warn!(%error, "form dropped before its dialog closed");
                        }
                    })
                    .children(self.render_summary()),
            )
    }
}

/// Options for the position select; the first entry means "nothing chosen".
pub fn position_items() -> Vec<SharedString> {
    std::iter::once(POSITION_PLACEHOLDER)
        .chain(Position::all().iter().map(Position::as_str))
        .map(SharedString::from)
        .collect()
}

/// Maps the selected select entry to the form's option value (`""` when unset).
pub fn position_option_value(selected: Option<&str>) -> &str {
    match selected {
        None | Some(POSITION_PLACEHOLDER) => "",
        Some(value) => value,
    }
}

/// Years of experience: digits with up to two decimals, no grouping separator.
fn experience_mask() -> MaskPattern {
    MaskPattern::Number {
        separator: None,
        fraction: Some(2),
    }
}

/// What an input's text becomes in the form state.
///
/// The interview time behaves like a date-time picker: nothing is stored
/// until the text is a complete local date-time.
fn stored_value(
    field: Field,
    raw: &str,
) -> &str {
    match field {
        Field::InterviewTime => interview_time_value(raw),
        _ => raw,
    }
}

fn make_text_input(
    placeholder: impl Into<SharedString>,
    window: &mut Window,
    cx: &mut Context<JobApplicationForm>,
) -> Entity<InputState> {
    cx.new(|closure_cx| InputState::new(window, closure_cx).placeholder(placeholder.into()))
}

/// A labeled row with the field's inline error underneath, when it has one.
fn make_field_row(
    field: Field,
    control: impl IntoElement,
    error: Option<String>,
    danger: Hsla,
) -> Div {
    v_flex()
        .gap_1()
        .child(make_labeled_row(format!("{}:", field.label())).child(control))
        .when_some(error, |this, message| {
            this.child(
                div()
                    .pl(px(170.))
                    .text_sm()
                    .text_color(danger)
                    .child(message),
            )
        })
}

/// Common outer container and right-aligned label for every row.
fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .rounded_md()
        .border_1()
        .child(
            div()
                .min_w(px(150.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}
