use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Form;
use cohortboard_core::{escape_html, BoardError};
use cohortboard_viz::CHART_JS_CDN;
use serde::Deserialize;

use crate::context::AppState;
use crate::dashboard::Dashboard;
use crate::error::AppResult;

/// Team and startup selector page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let context = state.context().await;
    Html(render_index(&context.teams(), &context.startups()))
}

#[derive(Debug, Default, Deserialize)]
pub struct VisualizeForm {
    pub team: Option<String>,
    pub startup: Option<String>,
}

/// Render the three charts for the selected team and startup.
pub async fn visualize(
    State(state): State<AppState>,
    form: Result<Form<VisualizeForm>, FormRejection>,
) -> AppResult<Html<String>> {
    let form = form.map(|Form(form)| form).unwrap_or_default();

    let team = form
        .team
        .filter(|team| !team.is_empty())
        .ok_or_else(|| BoardError::missing_field("team"))?;
    let startup = form.startup.unwrap_or_default();

    let context = state.context().await;
    let dashboard = Dashboard::build(&context, &team, &startup);
    Ok(Html(dashboard.to_html()?))
}

fn options(values: &[String]) -> String {
    values
        .iter()
        .map(|value| {
            let value = escape_html(value);
            format!("            <option value=\"{value}\">{value}</option>\n")
        })
        .collect()
}

fn render_index(teams: &[String], startups: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Cohort Dashboard</title>
    <script src="{CHART_JS_CDN}"></script>
</head>
<body>
    <h1>Cohort Dashboard</h1>
    <form id="visualize-form">
        <label for="team">Team</label>
        <select id="team" name="team">
            <option value="">Select a team</option>
{team_options}        </select>
        <label for="startup">Startup</label>
        <select id="startup" name="startup">
            <option value="">Select a startup</option>
{startup_options}        </select>
        <button type="submit">Visualize</button>
    </form>
    <div id="charts"></div>

    <h2>Weekly Goal Review</h2>
    <button id="review-button" type="button">Review goals</button>
    <div id="review"></div>

    <script>
        function mount(target, html) {{
            target.innerHTML = html;
            target.querySelectorAll('script').forEach((old) => {{
                const script = document.createElement('script');
                script.textContent = old.textContent;
                old.replaceWith(script);
            }});
        }}

        document.getElementById('visualize-form').addEventListener('submit', async (event) => {{
            event.preventDefault();
            const body = new URLSearchParams(new FormData(event.target));
            const response = await fetch('/visualize', {{ method: 'POST', body }});
            const target = document.getElementById('charts');
            if (response.ok) {{
                mount(target, await response.text());
            }} else {{
                target.textContent = await response.text();
            }}
        }});

        document.getElementById('review-button').addEventListener('click', async () => {{
            const target = document.getElementById('review');
            target.textContent = 'Reviewing...';
            const response = await fetch('/get_response', {{ method: 'POST' }});
            if (response.ok) {{
                const data = await response.json();
                target.innerHTML = data.response;
            }} else {{
                target.textContent = await response.text();
            }}
        }});
    </script>
</body>
</html>"#,
        team_options = options(teams),
        startup_options = options(startups),
    )
}
