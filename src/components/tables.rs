use crate::models::entries::{DirectorEntry, TopRatedMovie};
use crate::models::stats::format_millions_of_votes;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DirectorsTableProps {
    pub directors: Rc<Vec<DirectorEntry>>,
}

#[function_component(DirectorsTable)]
pub fn directors_table(props: &DirectorsTableProps) -> Html {
    html! {
        <section class="panel table-panel">
            <h2>{"Top 10 Directores"}</h2>
            <table class="ranked-table">
                <thead>
                    <tr>
                        <th>{"Director"}</th>
                        <th>{"Películas"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        props.directors.iter().map(|director| html! {
                            <tr>
                                <td class="primary">{&director.director_name}</td>
                                <td>{director.movie_count.to_string()}</td>
                            </tr>
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopRatedTableProps {
    pub movies: Rc<Vec<TopRatedMovie>>,
}

#[function_component(TopRatedTable)]
pub fn top_rated_table(props: &TopRatedTableProps) -> Html {
    html! {
        <section class="panel table-panel">
            <h2>{"Top 10 Películas Mejor Calificadas"}</h2>
            <table class="ranked-table">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{"Película"}</th>
                        <th>{"Rating"}</th>
                        <th>{"Votos"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        props.movies.iter().enumerate().map(|(index, movie)| html! {
                            <tr>
                                <td class="primary">{format!("#{}", index + 1)}</td>
                                <td>{&movie.title}</td>
                                {rating_cell(movie.rating)}
                                <td>{format_millions_of_votes(movie.votes)}</td>
                            </tr>
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </section>
    }
}

/// Star icon beside the rating; the icon is not part of the value text.
pub fn rating_cell(rating: f64) -> Html {
    html! {
        <td class="rating">
            <span class="star">{"★"}</span>
            <span class="rating-value">{rating.to_string()}</span>
        </td>
    }
}
