use crate::scheduler::GlooScheduler;
use crate::utils::*;
use clap::Args;
use memorou_core as game;
use yew::prelude::*;

type Session = game::GameSession<GlooScheduler>;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCardState {
    Hidden,
    Revealed(game::Symbol),
    Matched(game::Symbol),
}

impl From<&game::Card> for ViewCardState {
    fn from(card: &game::Card) -> Self {
        match (card.matched, card.visible_symbol()) {
            (true, Some(symbol)) => Self::Matched(symbol),
            (false, Some(symbol)) => Self::Revealed(symbol),
            (_, None) => Self::Hidden,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Flip(game::CardId),
    Restart(game::Difficulty),
    Timer(game::ScheduledEvent),
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    id: game::CardId,
    card_state: ViewCardState,
    #[prop_or_default]
    disabled: bool,
    callback: Callback<game::CardId>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    use ViewCardState::*;

    let CardProps {
        id,
        card_state,
        disabled,
        callback,
    } = props.clone();

    let (class, face) = match card_state {
        Hidden => (classes!("card"), None),
        Revealed(symbol) => (classes!("card", "flipped"), Some(symbol)),
        Matched(symbol) => (classes!("card", "flipped", "matched"), Some(symbol)),
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        if matches!(card_state, Hidden) && !disabled {
            log::trace!("card {} clicked", id);
            callback.emit(id);
        }
    });

    html! {
        <li {class} {onclick}>
            <div class="back">{"❓"}</div>
            <div class="front">{face.map(|symbol| symbol.to_string()).unwrap_or_default()}</div>
        </li>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct DifficultyProps {
    current: game::Difficulty,
    callback: Callback<game::Difficulty>,
}

#[function_component(DifficultySelector)]
fn difficulty_selector(props: &DifficultyProps) -> Html {
    html! {
        <menu class="difficulty">
            {
                for game::Difficulty::ALL.into_iter().map(|difficulty| {
                    let callback = props.callback.clone();
                    let onclick = Callback::from(move |_: MouseEvent| callback.emit(difficulty));
                    let class = classes!((difficulty == props.current).then_some("selected"));
                    html! {
                        <li><button {class} {onclick}>{difficulty.name()}</button></li>
                    }
                })
            }
        </menu>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct WinProps {
    stars: u8,
    moves: game::MoveCount,
    seconds: game::Seconds,
    on_play_again: Callback<MouseEvent>,
}

#[function_component(WinOverlay)]
fn win_overlay(props: &WinProps) -> Html {
    html! {
        <dialog class="win" open={true}>
            <article>
                <div class="party">{"🎉"}</div>
                <h2>{"You Won!"}</h2>
                <div class="stars">{star_string(props.stars)}</div>
                <p>{"Moves: "}<strong>{props.moves}</strong></p>
                <p>{"Time: "}<strong>{format!("{}s", props.seconds)}</strong></p>
                <footer>
                    <button onclick={props.on_play_again.clone()}>{"Play Again"}</button>
                </footer>
            </article>
        </dialog>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Starting difficulty
    #[arg(short, long, default_value_t)]
    pub(crate) difficulty: game::Difficulty,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) struct GameView {
    difficulty: game::Difficulty,
    session: Session,
}

impl GameView {
    fn restart(&mut self, difficulty: game::Difficulty) {
        log::debug!("new {} game", difficulty);
        self.difficulty = difficulty;
        self.session.restart(difficulty.config());
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { difficulty, seed } = *ctx.props();
        let seed = seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let scheduler = GlooScheduler::new(ctx.link().callback(Msg::Timer));
        Self {
            difficulty,
            session: Session::new(scheduler, difficulty.config(), seed),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Flip(id) => self.session.flip(id).has_update(),
            Timer(event) => self.session.handle_event(event).has_update(),
            Restart(difficulty) => {
                self.restart(difficulty);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let snapshot = self.session.snapshot();
        let difficulty = self.difficulty;

        let cb_flip = ctx.link().callback(Flip);
        let cb_difficulty = ctx.link().callback(Restart);
        let cb_new_game = ctx.link().callback(move |e: MouseEvent| {
            e.stop_propagation();
            Restart(difficulty)
        });
        let board_class = classes!("board", snapshot.is_input_locked.then_some("locked"));
        let grid_style = format!("grid-template-columns: repeat({}, 1fr)", snapshot.columns);

        html! {
            <div class="memorou">
                <h1>{"Memorou"}</h1>
                <DifficultySelector current={difficulty} callback={cb_difficulty}/>
                <nav class="stats">
                    <span>{format!("🎯 Moves: {}", snapshot.moves)}</span>
                    <span>{format!("✅ {}/{}", snapshot.matched_pairs, snapshot.pair_count)}</span>
                    <span>{format!("⏱️ {}s", snapshot.elapsed_seconds)}</span>
                </nav>
                <ul class={board_class} style={grid_style}>
                    {
                        for snapshot.cards.iter().map(|card| {
                            let card_state = ViewCardState::from(card);
                            html! {
                                <CardView
                                    key={card.id}
                                    id={card.id}
                                    {card_state}
                                    disabled={snapshot.is_input_locked}
                                    callback={cb_flip.clone()}
                                />
                            }
                        })
                    }
                </ul>
                <button class="new-game" onclick={cb_new_game.clone()}>{"🔄 New Game"}</button>
                {
                    match snapshot.stars {
                        Some(stars) if snapshot.is_won => html! {
                            <WinOverlay
                                {stars}
                                moves={snapshot.moves}
                                seconds={snapshot.elapsed_seconds}
                                on_play_again={cb_new_game}
                            />
                        },
                        _ => html! {},
                    }
                }
            </div>
        }
    }
}
