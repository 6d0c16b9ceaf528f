use leptos::prelude::*;

use crate::app::config::{MAX_DAY_OF_MONTH, WEEKDAYS};
use crate::app::form::FormFields;

/// Schedule inputs. Every `input`/`change` writes the field and then calls
/// `on_edit`, which saves the whole form.
#[component]
pub fn ScheduleForm(
    form: RwSignal<FormFields>,
    on_edit: Callback<()>,
    on_pick_default: Callback<()>,
) -> impl IntoView {
    let edit = move |apply: fn(&mut FormFields, String), value: String| {
        form.update(|f| apply(f, value));
        on_edit.run(());
    };

    view! {
        <form class="schedule-form" on:submit=|ev| ev.prevent_default()>
            <label>
                "Interval (seconds)"
                <input
                    type="number"
                    min="1"
                    prop:value=move || form.with(|f| f.interval.clone())
                    on:input=move |ev| edit(|f, v| f.interval = v, event_target_value(&ev))
                />
            </label>
            <label>
                "Start"
                <input
                    type="time"
                    prop:value=move || form.with(|f| f.start_time.clone())
                    on:change=move |ev| edit(|f, v| f.start_time = v, event_target_value(&ev))
                />
            </label>
            <label>
                "End"
                <input
                    type="time"
                    prop:value=move || form.with(|f| f.end_time.clone())
                    on:change=move |ev| edit(|f, v| f.end_time = v, event_target_value(&ev))
                />
            </label>
            <label>
                "Day of week"
                <select
                    prop:value=move || form.with(|f| f.weekly.clone())
                    on:change=move |ev| edit(|f, v| f.weekly = v, event_target_value(&ev))
                >
                    <option value="">"-"</option>
                    {WEEKDAYS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Day of month"
                <select
                    prop:value=move || form.with(|f| f.monthly.clone())
                    on:change=move |ev| edit(|f, v| f.monthly = v, event_target_value(&ev))
                >
                    <option value="">"-"</option>
                    {(1..=MAX_DAY_OF_MONTH)
                        .map(|day| view! { <option value=day.to_string()>{day.to_string()}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.random)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        form.update(|f| f.random = checked);
                        on_edit.run(());
                    }
                />
                "Random order"
            </label>
            <div class="default-wallpaper">
                <span>"Default wallpaper"</span>
                <input
                    type="text"
                    readonly=true
                    prop:value=move || form.with(|f| f.default_wallpaper.clone())
                />
                <button type="button" on:click=move |_| on_pick_default.run(())>"Choose"</button>
                <button
                    type="button"
                    on:click=move |_| {
                        form.update(|f| f.default_wallpaper.clear());
                        on_edit.run(());
                    }
                >
                    "Clear"
                </button>
            </div>
        </form>
    }
}
