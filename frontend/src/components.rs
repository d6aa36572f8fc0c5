use crate::models::{Caption, TranscriptResponse};
use crate::utils::format_timestamp;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UrlInputProps {
    pub url: String,
    pub loading: bool,
    pub on_submit: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct VideoEmbedProps {
    pub embed_url: String,
}

#[derive(Properties, PartialEq)]
pub struct TranscriptPanelProps {
    pub transcript: TranscriptResponse,
}

#[derive(Properties, PartialEq)]
pub struct CaptionRowProps {
    pub video_id: String,
    pub caption: Caption,
}

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    pub message: String,
}

#[function_component(UrlInput)]
pub fn url_input(props: &UrlInputProps) -> Html {
    let current_input = use_state(|| props.url.clone());

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default(); // Prevent default form submission (page reload)
            let url = current_input.trim().to_string();
            if !url.is_empty() {
                on_submit.emit(url);
            }
        })
    };

    html! {
        <form onsubmit={on_submit} class="mb-6">
            <label class="block text-gray-700 font-medium mb-2">{"🔗 Enter YouTube URL:"}</label>
            <div class="flex">
                <input
                    type="text"
                    class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="https://www.youtube.com/watch?v=..."
                    value={(*current_input).clone()}
                    oninput={on_input}
                    disabled={props.loading}
                />
                <button
                    type="submit"
                    class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                    disabled={props.loading}
                >
                    { if props.loading { "Working..." } else { "Summarize" } }
                </button>
            </div>
        </form>
    }
}

#[function_component(VideoEmbed)]
pub fn video_embed(props: &VideoEmbedProps) -> Html {
    html! {
        <div class="relative w-full mb-6" style="padding-top: 56.25%;">
            <iframe
                class="absolute inset-0 w-full h-full rounded-lg"
                src={props.embed_url.clone()}
                title="YouTube video player"
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                allowfullscreen=true
            />
        </div>
    }
}

#[function_component(CaptionRow)]
pub fn caption_row(props: &CaptionRowProps) -> Html {
    html! {
        <p class="text-sm text-gray-700 py-1">
            <a href={format!("https://www.youtube.com/watch?v={}&t={}s", props.video_id, props.caption.start as u32)}
               target="_blank"
               class="mr-2 text-blue-600 hover:underline font-mono">
                {format_timestamp(props.caption.start)}
            </a>
            {&props.caption.text}
        </p>
    }
}

#[function_component(TranscriptPanel)]
pub fn transcript_panel(props: &TranscriptPanelProps) -> Html {
    let expanded = use_state(|| false);
    let show_segments = use_state(|| false);
    let transcript = &props.transcript;

    html! {
        <div class="bg-gray-100 rounded-lg overflow-hidden mb-6">
            <div class="bg-gray-200 p-4 flex justify-between items-center cursor-pointer"
                 onclick={let expanded = expanded.clone(); move |_| expanded.set(!*expanded)}>
                <h3 class="text-lg font-semibold text-gray-800">
                    {"📄 Full Transcript"}
                    <span class="ml-2 text-sm font-normal text-gray-500">
                        {format!("({}, {} segments)", transcript.language_code, transcript.captions.len())}
                    </span>
                </h3>
                <span class="text-gray-600">
                    {if *expanded { "▼" } else { "▶" }}
                </span>
            </div>
            {
                if *expanded {
                    html! {
                        <div class="p-4">
                            <label class="inline-flex items-center mb-3">
                                <input
                                    type="checkbox"
                                    class="form-checkbox h-4 w-4 text-blue-600"
                                    checked={*show_segments}
                                    onchange={let show_segments = show_segments.clone(); move |_| show_segments.set(!*show_segments)}
                                />
                                <span class="ml-2 text-sm text-gray-700">{"Show timestamps"}</span>
                            </label>
                            {
                                if *show_segments {
                                    html! {
                                        <div class="divide-y divide-gray-200">
                                            { for transcript.captions.iter().map(|caption| html! {
                                                <CaptionRow video_id={transcript.video_id.clone()} caption={caption.clone()} />
                                            })}
                                        </div>
                                    }
                                } else {
                                    html! { <p class="text-gray-700 whitespace-pre-wrap">{&transcript.text}</p> }
                                }
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(InfoMessage)]
pub fn info_message(props: &MessageProps) -> Html {
    html! {
        <div class="bg-blue-50 border border-blue-200 text-blue-800 p-3 rounded mb-4">
            {&props.message}
        </div>
    }
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &MessageProps) -> Html {
    html! {
        <div class="bg-red-50 border border-red-200 text-red-700 p-3 rounded mb-4">
            {format!("⚠️ Error: {}", props.message)}
        </div>
    }
}

#[function_component(SummaryBlock)]
pub fn summary_block(props: &MessageProps) -> Html {
    html! {
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-gray-800 mb-3">{"📌 Summary"}</h2>
            <div class="bg-green-50 border border-green-200 text-green-900 p-4 rounded">
                {&props.message}
            </div>
        </div>
    }
}
