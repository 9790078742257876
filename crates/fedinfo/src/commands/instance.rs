//! Instance command handlers: metadata, activity, peers.

use tabled::Tabled;

use fedinfo_api::{Instance, InstanceV2, MastodonClient, WeeklyActivity};

use crate::cli::{GlobalOpts, InstanceArgs, PeersArgs};
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "Week")]
    week: String,
    #[tabled(rename = "Statuses")]
    statuses: i64,
    #[tabled(rename = "Logins")]
    logins: i64,
    #[tabled(rename = "Registrations")]
    registrations: i64,
}

fn activity_row(a: &WeeklyActivity) -> ActivityRow {
    ActivityRow {
        week: week_label(a),
        statuses: a.statuses,
        logins: a.logins,
        registrations: a.registrations,
    }
}

#[derive(Tabled)]
struct PeerRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Domain")]
    domain: String,
}

fn week_label(a: &WeeklyActivity) -> String {
    a.week.format("%Y-%m-%d").to_string()
}

// ── Detail views ────────────────────────────────────────────────────

fn or_dash(s: &str) -> String {
    if s.is_empty() { "-".into() } else { s.to_owned() }
}

fn instance_detail(ins: &Instance) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("URI", or_dash(&ins.uri)),
        ("Title", or_dash(&ins.title)),
        ("Version", or_dash(&ins.version)),
        ("Email", or_dash(&ins.email)),
        ("Languages", or_dash(&ins.languages.join(", "))),
    ];

    if let Some(stats) = ins.stats {
        rows.push(("Users", stats.user_count.to_string()));
        rows.push(("Statuses", stats.status_count.to_string()));
        rows.push(("Domains", stats.domain_count.to_string()));
    }

    if let Some(ref acct) = ins.contact_account {
        rows.push(("Contact", format!("@{}", acct.username)));
    }

    let mut urls: Vec<_> = ins.urls.iter().collect();
    urls.sort();
    for (name, url) in urls {
        rows.push(("URL", format!("{name}: {url}")));
    }

    if let Some(max) = ins
        .configuration()
        .and_then(|cfg| cfg.statuses.as_ref())
        .and_then(|s| s.get("max_characters"))
    {
        rows.push(("Max characters", max.to_string()));
    }

    rows
}

fn instance_v2_detail(ins: &InstanceV2) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Domain", or_dash(&ins.domain)),
        ("Title", or_dash(&ins.title)),
        ("Version", or_dash(&ins.version)),
        ("Source", or_dash(&ins.source_url)),
        ("Active users (month)", ins.usage.users.active_month.to_string()),
        ("Languages", or_dash(&ins.languages.join(", "))),
        (
            "Registrations",
            match (ins.registrations.enabled, ins.registrations.approval_required) {
                (false, _) => "closed".into(),
                (true, true) => "approval required".into(),
                (true, false) => "open".into(),
            },
        ),
        ("Contact email", or_dash(&ins.contact.email)),
    ];

    if let Some(ref acct) = ins.contact.account {
        rows.push(("Contact", format!("@{}", acct.username)));
    }

    let cfg = &ins.configuration;
    rows.push(("Streaming", or_dash(&cfg.urls.streaming)));
    rows.push(("Max characters", cfg.statuses.max_characters.to_string()));
    rows.push((
        "Max attachments",
        cfg.statuses.max_media_attachments.to_string(),
    ));
    rows.push(("Poll options", cfg.polls.max_options.to_string()));
    rows.push((
        "Translation",
        if cfg.translation.enabled { "enabled" } else { "disabled" }.into(),
    ));

    for rule in &ins.rules {
        rows.push(("Rule", format!("{}. {}", rule.id, rule.text)));
    }

    rows
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle_instance(
    client: &MastodonClient,
    args: &InstanceArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = if args.v2 {
        let ins = client.get_instance_v2().await?;
        output::render_single(&global.output, &ins, instance_v2_detail, |i| {
            i.domain.clone()
        })?
    } else {
        let ins = client.get_instance().await?;
        output::render_single(&global.output, &ins, instance_detail, |i| i.uri.clone())?
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_activity(client: &MastodonClient, global: &GlobalOpts) -> Result<(), CliError> {
    let activity = client.get_instance_activity().await?;
    let out = output::render_list(&global.output, &activity, activity_row, week_label)?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_peers(
    client: &MastodonClient,
    args: &PeersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut peers = client.get_instance_peers().await?;
    if let Some(limit) = args.limit {
        peers.truncate(limit);
    }

    let mut index = 0;
    let out = output::render_list(
        &global.output,
        &peers,
        |domain| {
            index += 1;
            PeerRow {
                index,
                domain: domain.clone(),
            }
        },
        String::clone,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
