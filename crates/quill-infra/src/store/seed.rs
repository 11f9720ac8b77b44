//! Sample content written on first start.

use chrono::{Duration, Utc};
use quill_core::domain::{Comment, Post, new_id};

struct SamplePost {
    title: &'static str,
    content: &'static str,
    excerpt: &'static str,
    author: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    image: &'static str,
    read_time: u32,
    age_days: i64,
}

const SAMPLE_POSTS: [SamplePost; 3] = [
    SamplePost {
        title: "Welcome to Our Blog",
        content: "This is the first post of our amazing blog. We'll be sharing interesting articles about technology, design, and more!",
        excerpt: "Welcome to our blog where we share insights about technology and design.",
        author: "Admin",
        category: "General",
        tags: &["welcome", "blog"],
        image: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=800&h=400&fit=crop",
        read_time: 2,
        age_days: 0,
    },
    SamplePost {
        title: "The Future of Web Development",
        content: "Web development is evolving rapidly with new technologies like React, Vue, and modern CSS frameworks. The future looks bright for developers who stay updated with the latest trends.",
        excerpt: "Exploring the latest trends and technologies shaping the future of web development.",
        author: "Tech Writer",
        category: "Technology",
        tags: &["web-development", "react", "future"],
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=800&h=400&fit=crop",
        read_time: 5,
        age_days: 1,
    },
    SamplePost {
        title: "Design Principles for Modern Websites",
        content: "Good design is crucial for user experience. We'll explore key design principles that make websites both beautiful and functional.",
        excerpt: "Learn the essential design principles that create engaging and user-friendly websites.",
        author: "Design Expert",
        category: "Design",
        tags: &["design", "ux", "ui"],
        image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=800&h=400&fit=crop",
        read_time: 4,
        age_days: 2,
    },
];

/// The sample posts, newest first.
pub fn sample_posts() -> Vec<Post> {
    let now = Utc::now();

    SAMPLE_POSTS
        .iter()
        .map(|sample| {
            let created_at = now - Duration::days(sample.age_days);
            Post {
                id: new_id(),
                title: sample.title.to_string(),
                content: sample.content.to_string(),
                excerpt: sample.excerpt.to_string(),
                author: sample.author.to_string(),
                category: sample.category.to_string(),
                tags: sample.tags.iter().map(|t| t.to_string()).collect(),
                image: sample.image.to_string(),
                created_at,
                updated_at: created_at,
                read_time: sample.read_time,
                views: 0,
            }
        })
        .collect()
}

/// Comments start out empty.
pub fn sample_comments() -> Vec<Comment> {
    Vec::new()
}
