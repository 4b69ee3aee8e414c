use yew::prelude::*;

use crate::components::detail::DetailHeader;
use crate::content::ARTICLES;

#[function_component(InsightsPage)]
pub fn insights_page() -> Html {
    html! {
        <section class="detail-page">
            <div class="detail-inner">
                <DetailHeader
                    lead="Insights & "
                    accent="Perspectives"
                    intro="Deep dives into technology trends, design thinking, and digital transformation strategy from our experts."
                />
                <div class="article-grid">
                    { for ARTICLES.iter().map(|article| html! {
                        <article class="article-card">
                            <div class="article-image">
                                <img src={article.image} alt={article.title} loading="lazy" decoding="async" />
                                <span class="article-category">{article.category}</span>
                            </div>
                            <div class="article-body">
                                <div class="article-meta">
                                    <span>{article.date}</span>
                                    <span>{article.read_time}</span>
                                </div>
                                <h3>{article.title}</h3>
                                <p>{article.excerpt}</p>
                                <div class="article-author">{"By "}{article.author}</div>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .article-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 32px;
                }
                .article-card {
                    border-radius: 16px;
                    overflow: hidden;
                    background: #0A0A0A;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    cursor: pointer;
                    transition: border-color 0.3s ease;
                }
                .article-card:hover {
                    border-color: rgba(0, 229, 255, 0.4);
                }
                .article-image {
                    position: relative;
                    height: 200px;
                    overflow: hidden;
                }
                .article-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .article-card:hover .article-image img {
                    transform: scale(1.05);
                }
                .article-category {
                    position: absolute;
                    top: 16px;
                    left: 16px;
                    padding: 4px 12px;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.6);
                    font-size: 12px;
                }
                .article-body {
                    padding: 24px;
                }
                .article-meta {
                    display: flex;
                    justify-content: space-between;
                    font-size: 12px;
                    color: #6b7280;
                }
                .article-body h3 {
                    font-size: 20px;
                    line-height: 1.35;
                }
                .article-body p {
                    color: #9ca3af;
                    font-size: 14px;
                    line-height: 1.6;
                }
                .article-author {
                    font-size: 12px;
                    color: #6b7280;
                    margin-top: 16px;
                }
                @media (max-width: 1024px) {
                    .article-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                @media (max-width: 768px) {
                    .article-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
