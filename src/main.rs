use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use portfolio_common::filter::{category_choices, filter_by_category, filter_by_tag_and_query, tag_choices};
use portfolio_common::{validate, ContactForm, Field, FilterState, PaperDetail, SectionRegistry, SubmissionStatus};
use portfolio_site::{cli, config, error, gateway, prompt, replay, submit};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, SiteError};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Sections => {
            let registry = SectionRegistry::portfolio();
            println!("🧭 portfolio - セクション一覧\n");
            for section in registry.iter() {
                println!("  {:>2}. {:<16} {}", section.order, section.label, section.href());
            }
        }

        Commands::Active { layout, scroll_y, sweep, json } => {
            let registry = SectionRegistry::portfolio();
            let mut viewport = replay::load_layout(&layout)?;
            if let Some(y) = scroll_y {
                viewport.scroll_to(y);
            }

            let positions = match sweep {
                Some(step) => replay::sweep_positions(&viewport, step)?,
                None => vec![viewport.scroll_y],
            };
            if cli.verbose {
                println!("- {}箇所を評価 (probe_offset={})", positions.len(), config.site.observer.probe_offset);
            }
            let snapshots = replay::replay(&registry, &config.site.observer, &viewport, &positions);

            if json {
                println!("{}", serde_json::to_string_pretty(&snapshots)?);
            } else {
                for snapshot in &snapshots {
                    let state = &snapshot.state;
                    println!(
                        "y={:>7.1}  active={:<16} scrollTop={:<5} compactHeader={:<5}{}",
                        state.scroll_y,
                        state.active_section_id.as_deref().unwrap_or("-"),
                        state.show_scroll_top,
                        state.header_scrolled,
                        if state.probe_hit { "" } else { "  (維持)" },
                    );
                    if cli.verbose {
                        println!("    表示済み: {}", snapshot.revealed.join(", "));
                        if !snapshot.skipped.is_empty() {
                            println!("    スキップ: {}", snapshot.skipped.join(", "));
                        }
                    }
                }
            }
        }

        Commands::Projects { category } => {
            let portfolio = config.portfolio(cli.content.as_deref())?;
            let choices = category_choices(&portfolio.projects);
            if !choices.iter().any(|c| c == &category) {
                return Err(SiteError::Config(format!(
                    "不明なカテゴリ: {}（選択肢: {}）",
                    category,
                    choices.join(" / ")
                )));
            }

            let mut state = FilterState::new();
            state.select_category(&category);
            let projects = filter_by_category(&portfolio.projects, &state);

            println!("🗂  portfolio - プロジェクト [{}]\n", category);
            for project in &projects {
                println!("  #{} {} ({})", project.id, project.title, project.category);
                println!("     {}", project.description);
                println!("     {}", project.technologies.join(", "));
            }
            println!("\n✔ {}件", projects.len());
        }

        Commands::Research { query, tag, show } => {
            let portfolio = config.portfolio(cli.content.as_deref())?;

            if let Some(id) = show {
                let mut detail = PaperDetail::default();
                detail.open(id);
                let paper = detail
                    .selected(&portfolio.papers)
                    .ok_or_else(|| SiteError::Config(format!("論文が見つかりません: {}", id)))?;
                println!("📄 {}\n", paper.title);
                println!("  {} · {}", paper.journal, paper.date);
                println!("  タグ: {}\n", paper.tags.join(", "));
                println!("{}\n", paper.summary);
                println!("  {}", paper.link);
                return Ok(());
            }

            let mut state = FilterState::new();
            state.set_query(&query);
            if let Some(tag) = &tag {
                state.toggle_tag(tag);
            }
            let papers = filter_by_tag_and_query(&portfolio.papers, &state);

            println!("🔬 portfolio - 研究\n");
            if cli.verbose {
                println!("- タグ: {}\n", tag_choices(&portfolio.papers).join(", "));
            }
            if papers.is_empty() {
                println!("  該当する論文はありません");
                return Ok(());
            }
            for paper in &papers {
                println!("  #{} {}", paper.id, paper.title);
                println!("     {} · {}  [{}]", paper.journal, paper.date, paper.tags.join(", "));
            }
            println!("\n✔ {}件", papers.len());
        }

        Commands::Contact { name, email, subject, message, no_input, dry_run } => {
            println!("✉️  portfolio - お問い合わせ\n");

            let mut form = ContactForm::new();
            let given = [
                (Field::Name, name),
                (Field::Email, email),
                (Field::Subject, subject),
                (Field::Message, message),
            ];
            for (field, value) in given {
                if let Some(value) = value {
                    form.set_field(field, &value);
                }
            }

            if !no_input {
                prompt::fill_missing(&mut form)?;
            }

            // 対話時は誤りがなくなるまで再入力
            loop {
                let errors = validate(form.fields());
                if errors.is_empty() {
                    break;
                }
                if no_input {
                    return Err(SiteError::Validation(submit::summarize(&errors)));
                }
                prompt::fix_errors(&mut form, &errors)?;
            }

            if dry_run {
                println!("✔ 入力内容に問題はありません（送信していません）");
                return Ok(());
            }

            let contact = &config.site.contact;
            let gateway = gateway::gateway_for(contact)?;
            if cli.verbose {
                match contact.endpoint.as_deref() {
                    Some(endpoint) => println!("- 送信先: {}", endpoint),
                    None => println!("- 送信先なし（疑似送信 {}ms）", contact.latency_ms),
                }
            }

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.enable_steady_tick(Duration::from_millis(100));

            let result = submit::deliver_form(
                &mut form,
                gateway.as_ref(),
                &gateway::TokioSleeper,
                contact.confirmation(),
                |status| match status {
                    SubmissionStatus::Submitting => spinner.set_message("送信中..."),
                    SubmissionStatus::Submitted => {
                        spinner.println(format!(
                            "✔ 送信しました ({})",
                            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
                        ));
                        spinner.set_message("完了表示中...");
                    }
                    _ => {}
                },
            )
            .await;
            spinner.finish_and_clear();
            result?;

            println!("\n✅ お問い合わせありがとうございました");
        }

        Commands::Config { show, init } => {
            if init {
                let path = Config::default().save()?;
                println!("✔ 設定ファイルを作成しました: {}", path.display());
            }

            if show || !init {
                let observer = &config.site.observer;
                let contact = &config.site.contact;
                println!("設定:");
                println!("  プローブオフセット: {}px", observer.probe_offset);
                println!("  トップへ戻る表示: {}px", observer.scroll_top_threshold);
                println!("  ヘッダー縮小: {}px", observer.header_threshold);
                println!("  可視判定の閾値: {}", observer.visibility_threshold);
                println!("  モバイル表示: {}px未満", config.site.menu.mobile_breakpoint);
                println!("  疑似送信の待ち時間: {}ms", contact.latency_ms);
                println!("  完了表示: {}ms", contact.confirmation_ms);
                println!("  送信先: {}", contact.endpoint.as_deref().unwrap_or("未設定"));
                println!(
                    "  コンテンツ: {}",
                    config
                        .content_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".into())
                );
            }
        }
    }

    Ok(())
}
