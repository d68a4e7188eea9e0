use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Site-wide styles. Component markup only carries class names.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --navy: #0f1b2d;
                --navy-soft: #1c2b42;
                --teal: #0d9488;
                --teal-light: #5eead4;
                --slate: #475569;
                --slate-light: #cbd5e1;
                --surface: #f8fafc;
                --danger: #ef4444;
                --nav-height: 80px;
            }

            html {
                scroll-behavior: smooth;
            }

            body {
                margin: 0;
                font-family: Inter, system-ui, -apple-system, sans-serif;
                color: var(--navy);
                background: var(--surface);
                line-height: 1.6;
                -webkit-font-smoothing: antialiased;
            }

            a {
                color: inherit;
            }

            .sr-only {
                position: absolute;
                width: 1px;
                height: 1px;
                padding: 0;
                margin: -1px;
                overflow: hidden;
                clip: rect(0, 0, 0, 0);
                border: 0;
            }

            .container {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 1.5rem;
            }

            .container.narrow {
                max-width: 760px;
            }

            .section {
                padding: 6rem 0;
                scroll-margin-top: var(--nav-height);
            }

            .section-tinted {
                background: #eef6f5;
            }

            .section-dark {
                background: var(--navy);
                color: #ffffff;
            }

            .section-header {
                text-align: center;
                margin-bottom: 3rem;
            }

            .section-heading {
                font-size: 2.5rem;
                font-weight: 700;
                letter-spacing: -0.02em;
                margin: 0 0 1rem;
            }

            .section-subheading {
                font-size: 1.125rem;
                color: var(--slate);
                margin: 0;
            }

            .label-uppercase {
                font-size: 0.75rem;
                font-weight: 600;
                letter-spacing: 0.15em;
                text-transform: uppercase;
                color: var(--teal);
            }

            .lead {
                font-size: 1.25rem;
            }

            .button {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                padding: 0.875rem 1.75rem;
                border-radius: 9999px;
                font-weight: 600;
                text-decoration: none;
                border: 1px solid transparent;
                cursor: pointer;
                transition: background 0.2s ease, transform 0.2s ease;
            }

            .button:disabled {
                opacity: 0.6;
                cursor: not-allowed;
            }

            .button-primary {
                background: var(--teal);
                color: #ffffff;
            }

            .button-primary:hover:not(:disabled) {
                background: #0f766e;
                transform: translateY(-1px);
            }

            .button-secondary {
                border-color: var(--teal);
                color: var(--teal);
                background: transparent;
            }

            .glass-card {
                background: rgba(255, 255, 255, 0.85);
                border: 1px solid rgba(15, 27, 45, 0.08);
                border-radius: 1.25rem;
                padding: 2rem;
                box-shadow: 0 20px 40px -24px rgba(15, 27, 45, 0.35);
            }

            .reveal-pending {
                opacity: 0;
                transform: translate3d(0, 20px, 0);
            }

            .fade-in {
                animation: fade-in 0.6s cubic-bezier(0.21, 0.47, 0.32, 0.98) both;
            }

            .fade-in-delay-1 { animation-delay: 0.1s; }
            .fade-in-delay-2 { animation-delay: 0.2s; }
            .fade-in-delay-3 { animation-delay: 0.3s; }
            .fade-in-delay-4 { animation-delay: 0.4s; }
            .fade-in-delay-5 { animation-delay: 0.5s; }
            .fade-in-delay-6 { animation-delay: 0.6s; }

            .animate-reveal {
                animation: text-reveal 0.9s cubic-bezier(0.21, 0.47, 0.32, 0.98) both;
            }

            @keyframes fade-in {
                from {
                    opacity: 0;
                    transform: translate3d(0, 20px, 0);
                }
                to {
                    opacity: 1;
                    transform: none;
                }
            }

            @keyframes text-reveal {
                from {
                    opacity: 0;
                    clip-path: inset(0 0 100% 0);
                }
                to {
                    opacity: 1;
                    clip-path: inset(0 0 0 0);
                }
            }

            @media (prefers-reduced-motion: reduce) {
                html {
                    scroll-behavior: auto;
                }
                .fade-in, .animate-reveal {
                    animation: none;
                }
                .reveal-pending {
                    opacity: 1;
                    transform: none;
                }
            }

            .top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                height: var(--nav-height);
                z-index: 50;
                transition: background 0.3s ease, box-shadow 0.3s ease;
            }

            .top-nav.scrolled {
                background: rgba(255, 255, 255, 0.92);
                backdrop-filter: blur(12px);
                box-shadow: 0 1px 0 rgba(15, 27, 45, 0.08);
            }

            .nav-content {
                max-width: 1200px;
                height: 100%;
                margin: 0 auto;
                padding: 0 1.5rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }

            .nav-logo {
                display: flex;
                align-items: center;
                gap: 0.5rem;
                font-weight: 700;
                text-decoration: none;
            }

            .nav-logo-bar {
                width: 4px;
                height: 1.5rem;
                border-radius: 2px;
                background: var(--teal);
            }

            .nav-links {
                display: flex;
                gap: 2rem;
                list-style: none;
                margin: 0;
                padding: 0;
            }

            .nav-link, .mobile-nav-link {
                text-decoration: none;
                font-weight: 500;
                color: var(--slate);
            }

            .nav-link.active, .mobile-nav-link.active {
                color: var(--teal);
            }

            .burger-menu {
                display: none;
                flex-direction: column;
                gap: 5px;
                background: none;
                border: none;
                cursor: pointer;
            }

            .burger-menu span {
                width: 24px;
                height: 2px;
                background: var(--navy);
            }

            .mobile-menu {
                display: none;
            }

            @media (max-width: 768px) {
                .nav-links {
                    display: none;
                }
                .burger-menu {
                    display: flex;
                }
                .mobile-menu.mobile-menu-open {
                    display: block;
                    background: #ffffff;
                    padding: 1rem 1.5rem;
                }
                .mobile-menu ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .mobile-menu li {
                    padding: 0.75rem 0;
                }
                .section-heading {
                    font-size: 2rem;
                }
            }

            .hero {
                position: relative;
                min-height: 100vh;
                display: flex;
                align-items: center;
                overflow: hidden;
                padding-top: var(--nav-height);
            }

            .hero-grid {
                position: absolute;
                inset: 0;
                background-image: linear-gradient(rgba(13, 148, 136, 0.06) 1px, transparent 1px),
                    linear-gradient(90deg, rgba(13, 148, 136, 0.06) 1px, transparent 1px);
                background-size: 48px 48px;
            }

            .hero-content {
                position: relative;
            }

            .hero-kicker {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                font-size: 0.875rem;
                font-weight: 600;
                color: var(--teal);
            }

            .hero-kicker-dot {
                width: 8px;
                height: 8px;
                border-radius: 50%;
                background: var(--teal);
            }

            .hero-title {
                font-size: clamp(2.75rem, 7vw, 5.5rem);
                line-height: 1.05;
                letter-spacing: -0.03em;
                margin: 1.5rem 0;
            }

            .hero-subhead {
                max-width: 640px;
                font-size: 1.25rem;
                color: var(--slate);
            }

            .hero-cta-group {
                display: flex;
                flex-wrap: wrap;
                gap: 1rem;
                margin-top: 2rem;
            }

            .scroll-indicator {
                position: absolute;
                bottom: 2rem;
                left: 50%;
                width: 1px;
                height: 48px;
                background: linear-gradient(var(--teal), transparent);
            }

            .activities-grid, .team-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                gap: 1.5rem;
            }

            .spotlight-card {
                position: relative;
                overflow: hidden;
                border-radius: 1.25rem;
                background: #ffffff;
                border: 1px solid rgba(15, 27, 45, 0.08);
                padding: 2rem;
            }

            .spotlight-glow {
                position: absolute;
                inset: 0;
                pointer-events: none;
                opacity: 0;
                transition: opacity 0.3s ease;
                background: radial-gradient(600px circle at var(--spot-x, 50%) var(--spot-y, 50%), rgba(13, 148, 136, 0.12), transparent 40%);
            }

            .spotlight-card:hover .spotlight-glow {
                opacity: 1;
            }

            .activity-icon-wrap {
                display: inline-flex;
                padding: 0.75rem;
                border-radius: 0.75rem;
                background: rgba(13, 148, 136, 0.1);
                color: var(--teal);
            }

            .activity-icon {
                width: 24px;
                height: 24px;
            }

            .closing-line, .support-line, .funding-line {
                text-align: center;
                color: var(--slate);
                margin-top: 2.5rem;
            }

            .member-card {
                text-align: center;
            }

            .member-photo, .member-initials {
                width: 96px;
                height: 96px;
                border-radius: 50%;
                margin: 0 auto 1rem;
                object-fit: cover;
            }

            .member-initials {
                display: flex;
                align-items: center;
                justify-content: center;
                font-weight: 700;
                font-size: 1.5rem;
                background: var(--navy);
                color: var(--teal-light);
            }

            .member-role {
                color: var(--slate);
                font-size: 0.875rem;
            }

            .form-field {
                display: flex;
                flex-direction: column;
                gap: 0.375rem;
                margin-bottom: 1.25rem;
            }

            .form-input {
                padding: 0.75rem 1rem;
                border-radius: 0.75rem;
                border: 1px solid var(--slate-light);
                font: inherit;
            }

            .form-input:focus {
                outline: 2px solid var(--teal);
                outline-offset: 1px;
            }

            .form-input.has-error {
                border-color: var(--danger);
            }

            .required, .field-error, .form-error {
                color: var(--danger);
            }

            .field-error {
                font-size: 0.875rem;
                margin: 0;
            }

            .privacy-notice {
                font-size: 0.75rem;
                color: var(--slate);
                margin-top: 1rem;
            }

            .form-success {
                text-align: center;
                border-color: var(--teal);
                margin-bottom: 2rem;
            }

            .widget-loading {
                display: flex;
                flex-direction: column;
                align-items: center;
                padding: 3rem 0;
                color: var(--slate);
            }

            .spinner {
                width: 32px;
                height: 32px;
                border-radius: 50%;
                border: 3px solid var(--slate-light);
                border-top-color: var(--teal);
                animation: spin 0.9s linear infinite;
            }

            @keyframes spin {
                to {
                    transform: rotate(360deg);
                }
            }

            .widget-trust {
                display: flex;
                justify-content: space-between;
                font-size: 0.75rem;
                color: var(--slate);
                margin-top: 1.5rem;
            }

            .site-footer {
                background: var(--navy);
                color: var(--slate-light);
                padding: 4rem 1.5rem 2rem;
            }

            .footer-grid {
                max-width: 1200px;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                gap: 2rem;
            }

            .footer-links {
                display: flex;
                flex-direction: column;
                gap: 0.5rem;
            }

            .footer-links a, .footer-contact a {
                text-decoration: none;
            }

            .footer-social {
                display: flex;
                gap: 1rem;
                margin-top: 1rem;
            }

            .social-icon {
                width: 20px;
                height: 20px;
            }

            .footer-ender {
                max-width: 1200px;
                margin: 3rem auto 0;
                text-align: center;
                font-size: 0.875rem;
            }

            .footer-wordmark {
                font-size: clamp(2.5rem, 10vw, 8rem);
                font-weight: 800;
                letter-spacing: -0.04em;
                color: rgba(255, 255, 255, 0.06);
                margin: 0;
            }

            .blog-page, .not-found-page {
                padding-top: var(--nav-height);
                min-height: 70vh;
            }

            .blog-embed iframe {
                border: none;
                background: #ffffff;
            }

            .blog-more {
                text-align: center;
                margin-top: 2rem;
            }
        "#)} />
    }
}
