use contracts::domain::a001_company_account::working_hours;
use leptos::prelude::*;

/// Seven-row weekly schedule editor. The serialized form stays in the parent
/// form state; every change re-encodes through the schedule codec.
#[component]
pub fn WorkingHoursEditor(
    hours: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="working-hours">
            {move || {
                let serialized = hours.get();
                let schedule = working_hours::decode(&serialized);
                schedule
                    .days
                    .into_iter()
                    .map(|day| {
                        let weekday = day.day;
                        let toggle_serialized = serialized.clone();
                        let start_serialized = serialized.clone();
                        let end_serialized = serialized.clone();
                        let start_for_toggle = day.start.clone();
                        let end_for_toggle = day.end.clone();
                        let end_for_start = day.end.clone();
                        let start_for_end = day.start.clone();
                        view! {
                            <div class="working-hours__row">
                                <label class="working-hours__day">
                                    <input
                                        type="checkbox"
                                        prop:checked=day.is_open
                                        on:change=move |ev| {
                                            let open = event_target_checked(&ev);
                                            on_change.run(working_hours::update(
                                                &toggle_serialized,
                                                weekday,
                                                open,
                                                &start_for_toggle,
                                                &end_for_toggle,
                                            ));
                                        }
                                    />
                                    <span class="working-hours__day-name">{weekday.name()}</span>
                                </label>
                                {if day.is_open {
                                    view! {
                                        <div class="working-hours__times">
                                            <input
                                                type="time"
                                                class="working-hours__time"
                                                prop:value=day.start.clone()
                                                on:change=move |ev| {
                                                    on_change.run(working_hours::update(
                                                        &start_serialized,
                                                        weekday,
                                                        true,
                                                        &event_target_value(&ev),
                                                        &end_for_start,
                                                    ));
                                                }
                                            />
                                            <span class="working-hours__separator">"–"</span>
                                            <input
                                                type="time"
                                                class="working-hours__time"
                                                prop:value=day.end.clone()
                                                on:change=move |ev| {
                                                    on_change.run(working_hours::update(
                                                        &end_serialized,
                                                        weekday,
                                                        true,
                                                        &start_for_end,
                                                        &event_target_value(&ev),
                                                    ));
                                                }
                                            />
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <span class="working-hours__closed">"Closed"</span>
                                    }
                                    .into_any()
                                }}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
