use leptos::*;

use crate::components::comment_form::CommentForm;
use crate::models::comment::{Comment, NewComment};
use crate::utils::date_format::format_comment_date;

/// "Author: <name>, Date: <Mon DD, YYYY>" line under a comment.
pub fn comment_byline(comment: &Comment) -> String {
    format!(
        "Author: {}, Date: {}",
        comment.author,
        format_comment_date(&comment.date)
    )
}

/// Lists a campsite's comments in the order given, followed by the button
/// that opens the comment form.
#[component]
pub fn CommentsList(
    comments: Vec<Comment>,
    campsite_id: u32,
    #[prop(into)] post_comment: Callback<NewComment>,
) -> impl IntoView {
    view! {
        <div class="col-md-5 m-1">
            <h4>"Comments"</h4>
            {comments
                .into_iter()
                .map(|comment| {
                    let byline = comment_byline(&comment);
                    view! {
                        <div class="comment" data-comment-id=comment.id>
                            <p>{comment.text}</p>
                            <p>{byline}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
            <CommentForm campsite_id=campsite_id on_submit=post_comment/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::comment::Rating;

    fn comment(id: u32, author: &str, date: &str) -> Comment {
        Comment {
            id,
            campsite_id: 3,
            rating: Rating::new(4).unwrap(),
            text: "Quiet and shady.".into(),
            author: author.into(),
            date: date.into(),
        }
    }

    #[test]
    fn byline_names_author_and_formatted_date() {
        assert_eq!(
            comment_byline(&comment(0, "Ida", "2018-10-25T16:30Z")),
            "Author: Ida, Date: Oct 25, 2018"
        );
    }

    #[test]
    fn byline_keeps_unparsable_date() {
        assert_eq!(
            comment_byline(&comment(0, "Ida", "last summer")),
            "Author: Ida, Date: last summer"
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn rendered_list_shows_bylines_in_order() {
        let comments = vec![
            comment(6, "Ida", "2018-10-25T16:30Z"),
            comment(7, "Hank", "2019-04-03T09:15Z"),
        ];
        let html = leptos::ssr::render_to_string(move || {
            view! {
                <CommentsList comments=comments campsite_id=3 post_comment=|_: NewComment| {}/>
            }
        })
        .to_string();

        let ida = html.find("Author: Ida, Date: Oct 25, 2018").unwrap();
        let hank = html.find("Author: Hank, Date: Apr 03, 2019").unwrap();
        assert!(ida < hank);
        assert!(!html.contains("-- Ida"));
    }
}
