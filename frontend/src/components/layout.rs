use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="layout">
            <style>{PAGE_STYLES}</style>
            { for props.children.iter() }
        </div>
    }
}

const PAGE_STYLES: &str = r#"
    html, body {
        margin: 0;
        padding: 0;
        background: #1A1A1A;
    }

    .layout {
        min-height: 100vh;
        background: #1A1A1A;
        color: #FAFAFA;
    }

    .stage {
        position: relative;
    }

    .fluid-background {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        pointer-events: none;
        filter: saturate(1.05) contrast(1.05);
    }

    .hero {
        position: relative;
        min-height: 100vh;
        width: 100%;
        overflow: hidden;
        color: #FAFAFA;
    }

    .hero-inner {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }

    .hero-grid {
        min-height: 100vh;
        display: grid;
        grid-template-columns: repeat(12, minmax(0, 1fr));
        align-items: center;
    }

    .hero-copy {
        grid-column: span 12 / span 12;
        transform-origin: left center;
    }

    .hero-headline {
        line-height: 1.1;
        letter-spacing: -0.02em;
    }

    .hero-line {
        margin: 0;
        font-family: 'Playfair Display', serif;
        font-weight: 400;
        font-size: 48px;
        opacity: 0;
        animation: line-enter 0.9s ease-out forwards;
    }

    .reveal {
        opacity: 0;
        animation: reveal 0.6s ease-out forwards;
    }

    .hero-subheadline {
        margin-top: 1.5rem;
        max-width: 60ch;
        color: #999999;
        font-family: Inter, system-ui, sans-serif;
        font-size: 18px;
        line-height: 1.6;
    }

    .hero-ticker {
        padding-top: 1rem;
    }

    .data-ticker {
        font-size: 14px;
        line-height: 1;
        color: #2C5F4D;
        font-family: 'Space Mono', ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, 'Liberation Mono', 'Courier New', monospace;
        transition: opacity 300ms;
    }

    .hero-cta {
        padding-top: 2rem;
    }

    .cta-button {
        display: inline-block;
        background: #2C5F4D;
        color: white;
        font-family: Inter, system-ui, sans-serif;
        font-size: 16px;
        font-weight: 500;
        padding: 1rem 2.25rem;
        border-radius: 4px;
        text-decoration: none;
        box-shadow: 0 8px 24px rgba(44, 95, 77, 0.3);
        transition: all 350ms cubic-bezier(0.4, 0, 0.2, 1);
    }

    .cta-button:hover {
        transform: translateY(-0.25rem);
    }

    .hero-network {
        grid-column: span 12 / span 12;
        position: relative;
    }

    .hero-parallax {
        position: absolute;
        right: 0;
        top: 0;
        height: 60vh;
        width: 100%;
    }

    .spline-scene, .spline-viewer {
        display: block;
        width: 100%;
        height: 100%;
    }

    .spline-placeholder {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 100%;
        height: 100%;
        color: #9AA5A1;
        font-family: Inter, sans-serif;
        font-size: 0.75rem;
    }

    .hero-network-fade {
        position: absolute;
        inset: 0;
        pointer-events: none;
        background: linear-gradient(to left, #1A1A1A, transparent, transparent);
    }

    .scroll-indicator {
        position: absolute;
        left: 50%;
        bottom: 2.5rem;
        transform: translateX(-50%);
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.75rem;
    }

    .scroll-indicator-label {
        font-size: 0.75rem;
        letter-spacing: 0.025em;
        color: #9AA5A1;
        font-family: Inter, sans-serif;
    }

    .scroll-indicator-line {
        position: relative;
        height: 60px;
        width: 1px;
        background: #2C5F4D;
    }

    .scroll-indicator-ping, .scroll-indicator-dot {
        position: absolute;
        bottom: -0.25rem;
        left: 50%;
        transform: translateX(-50%);
        display: block;
        height: 0.5rem;
        width: 0.5rem;
        border-radius: 9999px;
        background: #2C5F4D;
    }

    .scroll-indicator-ping {
        animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
    }

    .framework {
        position: relative;
        z-index: 10;
        min-height: 120vh;
        background: #111;
        color: #FAFAFA;
    }

    .framework-inner {
        max-width: 72rem;
        margin: 0 auto;
        padding: 6rem 1.5rem;
    }

    .framework h2 {
        font-size: 1.5rem;
        font-weight: 400;
        color: #9AA5A1;
    }

    .framework p {
        margin-top: 1.5rem;
        max-width: 42rem;
        color: #CFCFCF;
    }

    @keyframes line-enter {
        from { opacity: 0; filter: blur(8px); transform: translateY(10px); }
        to { opacity: 1; filter: blur(0); transform: translateY(0); }
    }

    @keyframes reveal {
        from { opacity: 0; transform: translateY(8px); }
        to { opacity: 1; transform: translateY(0); }
    }

    @keyframes ping {
        75%, 100% { transform: translateX(-50%) scale(2); opacity: 0; }
    }

    @media (min-width: 640px) {
        .hero-inner { padding: 0 2.5rem; }
        .hero-line { font-size: 56px; }
    }

    @media (min-width: 768px) {
        .hero-copy { grid-column: span 6 / span 6; }
        .hero-network { grid-column: span 6 / span 6; }
        .hero-parallax { height: 80vh; width: 60vw; }
        .hero-line { font-size: 64px; }
    }

    @media (min-width: 1024px) {
        .hero-inner { padding: 0 4rem; }
        .hero-copy { grid-column: span 5 / span 5; }
        .hero-network { grid-column: span 7 / span 7; }
        .hero-parallax { height: 90vh; }
    }
"#;
