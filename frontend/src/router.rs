use crate::api::{run_pipeline, PipelineHandles};
use crate::components::{
    ErrorMessage, InfoMessage, SummaryBlock, TranscriptPanel, UrlInput, VideoEmbed,
};
use crate::env_variable_utils::get_app_name;
use crate::models::{Stage, TranscriptResponse, VideoInfo};
use crate::utils::{get_url_param, set_url_param};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <SummarizerApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to the summarizer"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(SummarizerApp)]
pub fn summarizer_app() -> Html {
    let initial_url = use_state(|| get_url_param().unwrap_or_default());
    let completed_url = use_state(|| None::<String>);
    let init_done = use_state(|| false);

    let handles = PipelineHandles {
        stage: use_state(|| Stage::Idle),
        video: use_state(|| None::<VideoInfo>),
        transcript: use_state(|| None::<TranscriptResponse>),
        summary: use_state(|| None::<String>),
        error_message: use_state(|| None::<String>),
    };

    let start_pipeline = {
        let handles = handles.clone();
        let completed_url = completed_url.clone();

        move |url: String| {
            // Identical input with a finished result: keep what is on screen
            if *handles.stage == Stage::Done && completed_url.as_deref() == Some(url.as_str()) {
                return;
            }

            set_url_param(&url);
            handles.reset();
            completed_url.set(Some(url.clone()));

            let handles = handles.clone();
            wasm_bindgen_futures::spawn_local(async move {
                run_pipeline(url, handles).await;
            });
        }
    };

    // Deep link: run once for a `?url=` present on first load
    {
        let initial_url = initial_url.clone();
        let init_done = init_done.clone();
        let start_pipeline = start_pipeline.clone();

        use_effect(move || {
            if !*init_done {
                if !initial_url.is_empty() {
                    start_pipeline((*initial_url).clone());
                }
                init_done.set(true);
            }
            || ()
        });
    }

    let on_submit = Callback::from(move |url: String| start_pipeline(url));

    let stage = *handles.stage;

    html! {
        <div class="min-h-screen flex flex-col items-center bg-gray-700 p-4">
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-4xl">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                    { format!("🎬 {}", get_app_name()) }
                </h1>

                <UrlInput
                    url={(*initial_url).clone()}
                    loading={stage.is_busy()}
                    on_submit={on_submit}
                />

                {
                    if let Some(video) = &*handles.video {
                        html! { <VideoEmbed embed_url={video.embed_url.clone()} /> }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(message) = stage.status_message() {
                        html! { <InfoMessage message={message.to_string()} /> }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(transcript) = &*handles.transcript {
                        html! { <TranscriptPanel transcript={transcript.clone()} /> }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(summary) = &*handles.summary {
                        html! { <SummaryBlock message={summary.clone()} /> }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(msg) = &*handles.error_message {
                        html! { <ErrorMessage message={msg.clone()} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
