use std::sync::Arc;

use anyhow::Result;
use blog_client::{
    load_settings, ActiveView, Authentication, BlogShell, Route, SessionAuthentication,
};
use clap::{Parser, Subcommand};
use shared::domain::PostId;

#[derive(Parser, Debug)]
#[command(name = "blogger", about = "Console driver for the blog client")]
struct Args {
    /// Base URL of the blog API server (overrides config).
    #[arg(long)]
    server_url: Option<String>,
    /// Display name for the local session; requires --user-email.
    #[arg(long, requires = "user_email")]
    user_name: Option<String>,
    /// Email for the local session; requires --user-name.
    #[arg(long, requires = "user_name")]
    user_email: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print the blog list once.
    List,
    /// Create a post as the session user.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
    },
    /// Like a post by id.
    Like { id: String },
    /// Update a post's title and/or text.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        text: Option<String>,
    },
    /// Delete a post by id.
    Delete { id: String },
    /// Show the view a client-side path resolves to.
    Route { path: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(url) = args.server_url {
        settings.api_base_url = url;
    }

    let auth: Arc<dyn Authentication> = match (args.user_name, args.user_email) {
        (Some(name), Some(email)) => Arc::new(SessionAuthentication::logged_in(name, email)),
        _ => Arc::new(SessionAuthentication::logged_out()),
    };

    let mut shell = BlogShell::new(settings, auth)?;

    match args.command {
        Command::List => {
            shell.navigate("/blogList").await;
            if let ActiveView::BlogList(list) = shell.view() {
                let vm = list.view_model().await;
                println!("{}", vm.page_header.title);
                println!("{}", vm.message);
                for entry in &vm.blogs {
                    let mut flags = String::new();
                    if entry.liked {
                        flags.push_str(" [liked]");
                    }
                    if entry.editable {
                        flags.push_str(" [yours]");
                    }
                    println!(
                        "{}  {} by {} ({} likes){}",
                        entry.post.id,
                        entry.post.title,
                        entry.post.author_name,
                        entry.post.likes,
                        flags
                    );
                }
            }
        }
        Command::Add { title, text } => {
            shell.navigate("/blogAdd").await;
            let nav = match shell.view_mut() {
                ActiveView::BlogAdd(add) => {
                    add.title = title;
                    add.text = text;
                    add.add_blog().await
                }
                _ => None,
            };
            match shell.apply(nav).await {
                Some(_) => println!("post created"),
                None => println!("post not created; see log"),
            }
        }
        Command::Like { id } => {
            shell.navigate("/blogList").await;
            if let ActiveView::BlogList(list) = shell.view() {
                let id = PostId::new(id);
                list.like_blog(&id).await;
                let vm = list.view_model().await;
                match vm.blogs.iter().find(|entry| entry.post.id == id) {
                    Some(entry) => println!("{}: {} likes", entry.post.id, entry.post.likes),
                    None => println!("post {id} not found"),
                }
            }
        }
        Command::Edit { id, title, text } => {
            shell.navigate(&Route::BlogEdit { id: PostId::new(id) }.path()).await;
            let nav = match shell.view_mut() {
                ActiveView::BlogEdit(edit) => {
                    println!("{}", edit.message());
                    if let Some(blog) = edit.blog_mut() {
                        if let Some(title) = title {
                            blog.title = title;
                        }
                        if let Some(text) = text {
                            blog.text = text;
                        }
                    }
                    edit.save_blog().await
                }
                _ => None,
            };
            match shell.apply(nav).await {
                Some(_) => println!("post updated"),
                None => println!("post not updated; see log"),
            }
        }
        Command::Delete { id } => {
            shell
                .navigate(&Route::BlogDelete { id: PostId::new(id) }.path())
                .await;
            let nav = match shell.view_mut() {
                ActiveView::BlogDelete(delete) => {
                    if let Some(blog) = delete.blog() {
                        println!("deleting: {}", blog.title);
                    }
                    delete.delete_blog().await
                }
                _ => None,
            };
            match shell.apply(nav).await {
                Some(_) => println!("post deleted"),
                None => println!("post not deleted; see log"),
            }
        }
        Command::Route { path } => {
            let route = Route::resolve(&path);
            println!("{} -> {:?}", route.path(), route.template());
        }
    }

    // One-shot process: stop the list refresh poll if a list view is mounted.
    if let ActiveView::BlogList(list) = shell.view() {
        list.teardown().await;
    }

    Ok(())
}
