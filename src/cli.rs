use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオサイトのコンテンツとビュー状態を確認するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（デフォルト: ~/.config/portfolio/config.json）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// コンテンツJSONファイル（省略時は設定ファイルまたは組み込みデータ）
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ナビゲーションのセクション一覧を表示
    Sections,

    /// レイアウトファイルからアクティブセクションを求める
    Active {
        /// レイアウトJSON（scrollY / viewportHeight / boxes）
        #[arg(required = true)]
        layout: PathBuf,

        /// スクロール位置（省略時はレイアウトファイルの値）
        #[arg(short = 'y', long, allow_negative_numbers = true)]
        scroll_y: Option<f64>,

        /// 先頭から末尾までこの刻みで走査
        #[arg(long, conflicts_with = "scroll_y")]
        sweep: Option<f64>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// プロジェクトをカテゴリで絞り込む
    Projects {
        /// カテゴリ（all で全件）
        #[arg(short, long, default_value = "all")]
        category: String,
    },

    /// 研究論文を検索する
    Research {
        /// タイトル・概要・掲載誌の部分一致（大文字小文字を区別しない）
        #[arg(short, long, default_value = "")]
        query: String,

        /// タグで絞り込み
        #[arg(short, long)]
        tag: Option<String>,

        /// 指定idの概要を表示
        #[arg(long)]
        show: Option<u32>,
    },

    /// お問い合わせを検証して送信
    Contact {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        message: Option<String>,

        /// 対話入力をしない（未入力・誤りはそのままエラー）
        #[arg(long)]
        no_input: bool,

        /// 検証のみ行い送信しない
        #[arg(long)]
        dry_run: bool,
    },

    /// 設定を表示/初期化
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// デフォルト設定をファイルに書き出す
        #[arg(long)]
        init: bool,
    },
}
