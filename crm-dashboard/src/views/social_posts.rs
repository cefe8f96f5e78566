// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The crm-dashboard Authors
use async_trait::async_trait;
use crm_api_client::{ApiClient, Fallback, NewSocialPost, SocialPost, SocialPostStats};

use super::{row_action, ActionError, FormData, Params, View};
use leptos::IntoView;

use crate::widgets::{or_dash, stat_cards, DataTable, Form};

const PLATFORMS: &[&str] = &["facebook", "instagram", "linkedin", "twitter"];

#[derive(Default)]
pub struct SocialPostsView {
    posts: Vec<SocialPost>,
    stats: SocialPostStats,
}

impl SocialPostsView {
    pub fn create(_params: &Params) -> Box<dyn View> {
        Box::new(Self::default())
    }
}

#[async_trait]
impl View for SocialPostsView {
    fn title(&self) -> &'static str {
        "Social Posts"
    }

    async fn mount(&mut self, api: &ApiClient) {
        let social = api.social_posts();
        self.posts = social.list().await.or_empty("get_social_posts");
        self.stats = social.stats().await.or_empty("get_social_post_stats");
    }

    async fn handle(
        &mut self,
        api: &ApiClient,
        action: &str,
        form: &FormData,
    ) -> Result<String, ActionError> {
        match action {
            "create" => {
                let post = NewSocialPost {
                    platform: form.text("platform")?,
                    content: form.text("content")?,
                    image_url: form.opt_text("image_url"),
                    scheduled_at: form.opt_text("scheduled_at"),
                };
                let created = api.social_posts().create(&post).await?;
                Ok(format!("Post {} on {}", created.status, created.platform))
            }
            "delete" => {
                api.social_posts().delete(form.id("id")?).await?;
                Ok("Post deleted".to_string())
            }
            _ => Err(ActionError::unknown(action)),
        }
    }

    fn render(&self) -> leptos::View {
        let s = &self.stats;
        let cards = stat_cards(vec![
            ("Posts", s.total_posts.to_string()),
            ("Scheduled", s.scheduled.to_string()),
            ("Published", s.published.to_string()),
            ("Likes", s.total_likes.to_string()),
            ("Shares", s.total_shares.to_string()),
        ]);

        let mut table = DataTable::new(&["Platform", "Content", "Status", "Scheduled", "Likes", "Shares", ""])
            .empty_message("No posts yet");
        for post in &self.posts {
            table.row(vec![
                post.platform.clone().into_view(),
                post.content.clone().into_view(),
                post.status.clone().into_view(),
                or_dash(post.scheduled_at.as_deref()).into_view(),
                post.likes.into_view(),
                post.shares.into_view(),
                row_action("/social-posts/delete", "Delete", post.id),
            ]);
        }

        let form = Form::new("/social-posts/create", "Create post")
            .select("platform", "Platform", PLATFORMS, "")
            .textarea("content", "Content", "")
            .text("image_url", "Image URL", "")
            .text("scheduled_at", "Schedule (YYYY-MM-DD HH:MM)", "")
            .render();

        vec![cards, form, table.render()].into_view()
    }
}
